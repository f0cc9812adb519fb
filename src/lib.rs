//! Word-search puzzle engine.
//!
//! Two components make up the core: [`GridBuilder`] lays a word list onto an
//! N×N letter grid (seeded, bounded-retry placement with random fill), and
//! [`SelectionEngine`] turns pointer gestures over that grid into validated
//! word matches (forward or reverse, eight directions). The surrounding
//! game-host shell owns rendering, persistence, and pointer-to-cell
//! resolution; this crate only ever sees grid coordinates.

pub mod config;
pub mod errors;
pub mod game;
pub mod models;
pub mod utils;

pub use config::PuzzleConfig;
pub use errors::PuzzleError;
pub use game::{GridBuilder, SelectionEngine, MAX_PLACEMENT_ATTEMPTS};
pub use models::{
    Direction, FoundState, Grid, Placement, Position, Puzzle, PuzzleComplete, SelectionOutcome,
};
