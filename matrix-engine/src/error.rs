//! FILENAME: matrix-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    /// Row `row` (1-based) does not have `expected` entries.
    #[error("Malformed matrix: row {row} has {found} entries, expected {expected}")]
    MalformedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Degenerate input: matrix has no entries")]
    DegenerateInput,

    /// A 1-based row or column index outside `1..=dimension`.
    #[error("Index {index} out of range for {dimension}x{dimension} matrix")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// An integer product or sum left the element type's range.
    #[error("Arithmetic overflow during cofactor expansion")]
    Overflow,

    #[error("Matrix dimension {dimension} exceeds configured limit of {limit}")]
    DimensionLimitExceeded { dimension: usize, limit: usize },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
