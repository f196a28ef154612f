// error.rs - Error types for torus_life

use thiserror::Error;

/// Errors raised by grid and automaton operations.
///
/// Every failing operation leaves the grid exactly as it was.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Row index.
        x: usize,
        /// Column index.
        y: usize,
        /// Grid width (row count).
        width: usize,
        /// Grid height (row length).
        height: usize,
    },

    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Numeric cell code the variant cannot represent.
    #[error("invalid cell state {0}")]
    InvalidState(u8),

    /// Literal rows of differing length.
    #[error("rows have differing lengths")]
    RaggedRows,

    /// The row worker runtime could not be started.
    #[error("failed to start row runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// A row worker panicked or was cancelled.
    #[error("row worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;
