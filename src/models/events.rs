use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Payload of the one-shot completion event, fired when the found count
/// reaches the input word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleComplete {
    pub found_count: usize,
    pub total_words: usize,
}

/// Result of finalizing a selection gesture, for the host to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// `end_selection` was called with no active gesture.
    Idle,
    /// The selected line matched no remaining word. No state changed.
    Miss,
    /// A remaining word was matched (forward or reverse). `completion` is
    /// set on the match that finishes the puzzle, and only on that one.
    Match {
        word: String,
        cells: Vec<Position>,
        completion: Option<PuzzleComplete>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serializes_with_type_tag() {
        let outcome = SelectionOutcome::Match {
            word: "CAT".to_string(),
            cells: vec![Position { row: 0, col: 0 }],
            completion: Some(PuzzleComplete {
                found_count: 1,
                total_words: 1,
            }),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "match");
        assert_eq!(json["word"], "CAT");
        assert_eq!(json["completion"]["found_count"], 1);

        let miss = serde_json::to_value(SelectionOutcome::Miss).unwrap();
        assert_eq!(miss["type"], "miss");
    }
}
