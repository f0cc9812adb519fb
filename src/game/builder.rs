use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::PuzzleError;
use crate::models::{Direction, Grid, Placement, Position, Puzzle};
use crate::utils::letters::{normalize_word, random_filler_letter};

/// Placement attempts per word before it is skipped. Raising this improves
/// placement success on dense word lists at the cost of build time.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

pub struct GridBuilder;

impl GridBuilder {
    /// Build a puzzle with the given random source. Words are normalized,
    /// laid onto the grid one at a time with random anchors and directions,
    /// and the leftover cells are filled with random letters. A word that
    /// finds no valid spot within [`MAX_PLACEMENT_ATTEMPTS`] is skipped.
    pub fn build(
        words: &[String],
        size: usize,
        rng: &mut impl Rng,
    ) -> Result<Puzzle, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::InvalidGridSize(size));
        }

        let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
        let mut placements = Vec::with_capacity(words.len());
        let mut targets = Vec::with_capacity(words.len());

        for raw in words {
            let word = normalize_word(raw);
            if word.is_empty() {
                tracing::warn!("skipping word {:?}: empty after normalization", raw);
                continue;
            }

            match Self::place_word(&mut cells, &word, size, rng) {
                Some(span) => placements.push(Placement {
                    word: word.clone(),
                    cells: span,
                }),
                None => tracing::debug!(
                    "no placement for {:?} after {} attempts",
                    word,
                    MAX_PLACEMENT_ATTEMPTS
                ),
            }

            targets.push(word);
        }

        let grid = Self::fill_grid(cells, rng);

        tracing::info!(
            "built {}x{} puzzle, placed {}/{} words",
            size,
            size,
            placements.len(),
            targets.len()
        );

        Ok(Puzzle {
            grid,
            placements,
            targets,
        })
    }

    /// Build a puzzle reproducibly from a seed.
    pub fn build_seeded(words: &[String], size: usize, seed: u64) -> Result<Puzzle, PuzzleError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::build(words, size, &mut rng)
    }

    /// Try random anchor/direction pairs until the word fits or the attempt
    /// budget runs out. Returns the occupied cells in reading order.
    fn place_word(
        cells: &mut [Vec<Option<char>>],
        word: &str,
        size: usize,
        rng: &mut impl Rng,
    ) -> Option<Vec<Position>> {
        let letters: Vec<char> = word.chars().collect();

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let direction = Direction::random(rng);
            let anchor = Position {
                row: rng.random_range(0..size),
                col: rng.random_range(0..size),
            };

            if let Some(span) = Self::try_place(cells, &letters, anchor, direction, size) {
                return Some(span);
            }
        }

        None
    }

    /// Test one anchor/direction candidate and commit it if valid. Every
    /// cell along the ray must be in bounds and either unwritten or already
    /// holding the identical letter (crossing words share cells).
    fn try_place(
        cells: &mut [Vec<Option<char>>],
        letters: &[char],
        anchor: Position,
        direction: Direction,
        size: usize,
    ) -> Option<Vec<Position>> {
        let (dr, dc) = direction.delta();
        let mut span = Vec::with_capacity(letters.len());

        for (i, &letter) in letters.iter().enumerate() {
            let row = anchor.row as i64 + dr as i64 * i as i64;
            let col = anchor.col as i64 + dc as i64 * i as i64;
            if row < 0 || col < 0 || row >= size as i64 || col >= size as i64 {
                return None;
            }

            let pos = Position {
                row: row as usize,
                col: col as usize,
            };
            match cells[pos.row][pos.col] {
                Some(existing) if existing != letter => return None,
                _ => span.push(pos),
            }
        }

        // Candidate is valid, commit the letters.
        for (&letter, pos) in letters.iter().zip(&span) {
            cells[pos.row][pos.col] = Some(letter);
        }

        Some(span)
    }

    fn fill_grid(cells: Vec<Vec<Option<char>>>, rng: &mut impl Rng) -> Grid {
        let mut rows = Vec::with_capacity(cells.len());
        for row in cells {
            let mut out = Vec::with_capacity(row.len());
            for cell in row {
                out.push(match cell {
                    Some(letter) => letter,
                    None => random_filler_letter(rng),
                });
            }
            rows.push(out);
        }
        Grid::from_rows(rows)
    }
}
