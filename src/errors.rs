use thiserror::Error;

/// Errors surfaced by puzzle construction and configuration.
///
/// Most failure modes in this engine are deliberately soft (an unplaceable
/// word is skipped, a missed selection is a no-op); only configuration the
/// builder cannot work with at all is rejected up front.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// A grid dimension of zero cannot hold any cell.
    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    /// A serialized grid payload whose rows do not form the declared
    /// square. Only reachable through deserialization; the builder always
    /// constructs square grids.
    #[error("grid rows do not form a {0}x{0} square")]
    MalformedGrid(usize),
}
