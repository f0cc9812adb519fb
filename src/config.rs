use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::errors::PuzzleError;
use crate::utils::letters::normalize_word;

/// Puzzle configuration as handed over by the host: the target word list
/// and the grid dimension. Where the host stores it (database, JSON blob,
/// env) is its own business; this is only the parse/validate seam.
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleConfig {
    pub words: Vec<String>,
    pub size: usize,
}

impl PuzzleConfig {
    pub fn new(words: Vec<String>, size: usize) -> Result<Self, PuzzleError> {
        let config = Self { words, size };
        config.validate()?;
        Ok(config)
    }

    /// Load from the environment, mainly for demo and test harnesses.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let words = env::var("PUZZLE_WORDS")
            .context("PUZZLE_WORDS must be set (comma-separated word list)")?
            .split(',')
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        let size = env::var("PUZZLE_GRID_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("PUZZLE_GRID_SIZE must be a number")?;

        let config = PuzzleConfig { words, size };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the builder cannot work with at all. Words
    /// longer than the grid pass validation (the builder skips them), but
    /// they make completion unreachable, so they are logged for the host.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.size == 0 {
            return Err(PuzzleError::InvalidGridSize(self.size));
        }

        for word in &self.words {
            let normalized = normalize_word(word);
            if normalized.chars().count() > self.size {
                tracing::warn!(
                    "word {:?} is longer than the {}x{} grid and can never be placed",
                    word,
                    self.size,
                    self.size
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        let result = PuzzleConfig::new(vec!["CAT".to_string()], 0);
        assert_eq!(result.unwrap_err(), PuzzleError::InvalidGridSize(0));
    }

    #[test]
    fn test_valid_config_accepted() {
        let config = PuzzleConfig::new(vec!["CAT".to_string(), "DOG".to_string()], 8).unwrap();
        assert_eq!(config.words.len(), 2);
        assert_eq!(config.size, 8);
    }

    #[test]
    fn test_oversized_word_passes_validation() {
        // Soft condition: the builder skips it, the host gets a warning.
        let config = PuzzleConfig::new(vec!["ABBREVIATION".to_string()], 5);
        assert!(config.is_ok());
    }

    #[test]
    fn test_deserializes_from_json() {
        let config: PuzzleConfig =
            serde_json::from_str(r#"{"words":["sun","run"],"size":10}"#).unwrap();
        assert_eq!(config.words, vec!["sun", "run"]);
        assert_eq!(config.size, 10);
    }
}
