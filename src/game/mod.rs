// Puzzle engine modules

pub mod builder;
pub mod selection;

pub use builder::{GridBuilder, MAX_PLACEMENT_ATTEMPTS};
pub use selection::SelectionEngine;
