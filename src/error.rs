use thiserror::Error;

// Unified error type for stationary

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IterError {
    #[error("matrix is not square ({nrows}x{ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("dimension mismatch: expected {expected} entries, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("zero diagonal entry at row {0}")]
    ZeroPivot(usize),
    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),
}
