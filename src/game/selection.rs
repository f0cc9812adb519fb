use std::collections::HashSet;

use crate::models::{FoundState, Grid, Position, Puzzle, PuzzleComplete, SelectionOutcome};

/// One in-progress pointer gesture: where it started, where the pointer is
/// now, and the straight line derived between the two.
#[derive(Debug, Clone)]
struct Selection {
    anchor: Position,
    head: Position,
    line: Vec<Position>,
}

/// Turns pointer gestures over the grid into word matches.
///
/// The engine owns one immutable [`Puzzle`] at a time; `reset` swaps in a
/// whole new instance rather than patching fields. At most one selection is
/// active, and `begin_selection` discards any unfinished gesture without
/// evaluating it.
pub struct SelectionEngine {
    puzzle: Puzzle,
    remaining: HashSet<String>,
    found: FoundState,
    active: Option<Selection>,
    completion_fired: bool,
}

impl SelectionEngine {
    pub fn new(puzzle: Puzzle) -> Self {
        let remaining = puzzle.targets.iter().cloned().collect();
        Self {
            puzzle,
            remaining,
            found: FoundState::default(),
            active: None,
            completion_fired: false,
        }
    }

    /// Replace the whole puzzle instance: new grid, new placements, empty
    /// found state, completion latch cleared.
    pub fn reset(&mut self, puzzle: Puzzle) {
        *self = Self::new(puzzle);
    }

    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn found_state(&self) -> &FoundState {
        &self.found
    }

    /// The line the active gesture currently covers, for live highlighting.
    pub fn selection_line(&self) -> Option<&[Position]> {
        self.active.as_ref().map(|sel| sel.line.as_slice())
    }

    pub fn is_complete(&self) -> bool {
        self.completion_fired
    }

    /// Start a gesture at `cell`. Any unfinished prior selection is dropped
    /// unevaluated (the pointer left the grid and came back, for example).
    pub fn begin_selection(&mut self, cell: Position) {
        self.assert_on_grid(cell);
        self.active = Some(Selection {
            anchor: cell,
            head: cell,
            line: vec![cell],
        });
    }

    /// Move the gesture head to `cell` and rederive the line. No-op when no
    /// selection is active, so stray move events are harmless.
    pub fn update_selection(&mut self, cell: Position) {
        self.assert_on_grid(cell);
        let Some(selection) = self.active.as_mut() else {
            return;
        };
        selection.head = cell;
        selection.line = line_between(selection.anchor, cell);
    }

    /// Finalize the gesture: read the letters along the derived line and
    /// test the string, then its reverse, against the remaining words. A
    /// match moves the word into the found state and highlights its cells;
    /// a miss changes nothing. Either way the selection is cleared.
    pub fn end_selection(&mut self) -> SelectionOutcome {
        let Some(selection) = self.active.take() else {
            return SelectionOutcome::Idle;
        };

        let forward: String = selection
            .line
            .iter()
            .map(|&pos| self.puzzle.grid.letter(pos))
            .collect();
        let reverse: String = forward.chars().rev().collect();

        let matched = if self.remaining.contains(&forward) {
            Some(forward)
        } else if self.remaining.contains(&reverse) {
            Some(reverse)
        } else {
            None
        };

        let Some(word) = matched else {
            tracing::debug!("selection {:?}..{:?} matched nothing", selection.anchor, selection.head);
            return SelectionOutcome::Miss;
        };

        self.remaining.remove(&word);
        self.found.words.insert(word.clone());
        self.found.highlighted.extend(selection.line.iter().copied());

        let completion = self.check_completion();
        tracing::info!(
            "found {:?} ({}/{})",
            word,
            self.found.words.len(),
            self.puzzle.total_words()
        );

        SelectionOutcome::Match {
            word,
            cells: selection.line,
            completion,
        }
    }

    /// Edge-triggered completion latch: returns the payload on the match
    /// that brings the found count up to the input word count, and never
    /// again for this puzzle instance.
    fn check_completion(&mut self) -> Option<PuzzleComplete> {
        if self.completion_fired || self.found.words.len() < self.puzzle.total_words() {
            return None;
        }
        self.completion_fired = true;
        Some(PuzzleComplete {
            found_count: self.found.words.len(),
            total_words: self.puzzle.total_words(),
        })
    }

    /// Out-of-range coordinates mean the host resolved a pointer event
    /// against cells it does not have; that is a host bug, so fail fast
    /// instead of clamping.
    fn assert_on_grid(&self, cell: Position) {
        assert!(
            self.puzzle.grid.contains(cell),
            "cell {:?} outside {}x{} grid",
            cell,
            self.puzzle.grid.size(),
            self.puzzle.grid.size()
        );
    }
}

/// Ordered cells from `anchor` to `head` inclusive. A gesture that stayed on
/// one of the eight directions walks unit steps between the two; anything
/// else falls through to the dominant-axis snap.
fn line_between(anchor: Position, head: Position) -> Vec<Position> {
    if anchor == head {
        return vec![anchor];
    }

    let dr = head.row as i64 - anchor.row as i64;
    let dc = head.col as i64 - anchor.col as i64;

    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return snap_dominant_axis(anchor, dr, dc);
    }

    let steps = dr.abs().max(dc.abs());
    let (step_r, step_c) = (dr.signum(), dc.signum());
    (0..=steps)
        .map(|i| Position {
            row: (anchor.row as i64 + step_r * i) as usize,
            col: (anchor.col as i64 + step_c * i) as usize,
        })
        .collect()
}

/// Lenient reinterpretation of an imperfect gesture: keep only the dominant
/// axis, anchored at the start cell. Note the resulting line need not pass
/// through the reported head cell. Kept as its own function so the policy
/// (reject, nearest-line snap, or this) can be swapped in one place.
fn snap_dominant_axis(anchor: Position, dr: i64, dc: i64) -> Vec<Position> {
    if dr.abs() > dc.abs() {
        let step = dr.signum();
        (0..=dr.abs())
            .map(|i| Position {
                row: (anchor.row as i64 + step * i) as usize,
                col: anchor.col,
            })
            .collect()
    } else {
        let step = dc.signum();
        (0..=dc.abs())
            .map(|i| Position {
                row: anchor.row,
                col: (anchor.col as i64 + step * i) as usize,
            })
            .collect()
    }
}
