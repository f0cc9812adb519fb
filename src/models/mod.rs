pub mod events;
pub mod puzzle;

pub use events::{PuzzleComplete, SelectionOutcome};
pub use puzzle::{Direction, FoundState, Grid, Placement, Position, Puzzle};
