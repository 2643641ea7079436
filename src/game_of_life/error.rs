//! Error types for the simulation engine.

use super::Cell;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("seed probability must be within [0, 1], got {0}")]
    InvalidSeedProbability(f64),

    #[error("grid side length must be positive and fit in memory, got {0}")]
    InvalidSideLength(usize),

    #[error("cell {cell} out of bounds for {side_length}x{side_length} grid")]
    CellOutOfBounds { cell: Cell, side_length: usize },

    #[error("pattern of {width}x{height} does not fit in {side_length}x{side_length} grid")]
    PatternTooLarge {
        width: usize,
        height: usize,
        side_length: usize,
    },
}
