use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::PuzzleError;

/// A single cell coordinate on the grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// One of the eight straight-line directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Unit step as a (row delta, column delta) pair, components in {-1, 0, 1}.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Pick a uniformly random direction.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Square matrix of uppercase letters, fully populated and immutable after
/// construction. Every cell holds exactly one character, either from a
/// placed word or a random filler. Deserialization goes through [`RawGrid`]
/// so a malformed payload cannot smuggle in a ragged or mis-sized matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<char>>,
}

/// Wire shape of [`Grid`], validated before it becomes one.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    rows: Vec<Vec<char>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = PuzzleError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(PuzzleError::InvalidGridSize(raw.size));
        }
        if raw.rows.len() != raw.size || raw.rows.iter().any(|row| row.len() != raw.size) {
            return Err(PuzzleError::MalformedGrid(raw.size));
        }
        Ok(Self {
            size: raw.size,
            rows: raw.rows,
        })
    }
}

impl Grid {
    /// Builder-internal constructor. Callers must pass a square, fully
    /// populated matrix.
    pub(crate) fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let size = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == size));
        Self { size, rows }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at the given cell. Panics if the cell is out of range; use
    /// [`Grid::contains`] to check first.
    pub fn letter(&self, pos: Position) -> char {
        self.rows[pos.row][pos.col]
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Rows in top-to-bottom order, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(|row| row.as_slice())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (i, letter) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", letter)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// A placed word and the cells it occupies, in reading order (first letter
/// to last). Words that could not be placed have no `Placement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub cells: Vec<Position>,
}

/// One puzzle instance: the built grid, the placements that succeeded, and
/// the normalized target words (every input word, placed or not, duplicates
/// kept). Created once per construction or reset and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    pub targets: Vec<String>,
}

impl Puzzle {
    /// Number of input words. Completion is measured against this count, so
    /// a word that could never be placed (or a duplicate that collapses at
    /// match time) leaves the puzzle unfinishable; the host is expected to
    /// validate word lists against the grid size up front.
    pub fn total_words(&self) -> usize {
        self.targets.len()
    }
}

/// Accumulated record of matched words and the cells to highlight for them.
/// Grows monotonically until the whole puzzle instance is replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoundState {
    pub words: HashSet<String>,
    pub highlighted: HashSet<Position>,
}

impl FoundState {
    pub fn is_found(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }
}
