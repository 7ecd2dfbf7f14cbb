use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TridiagonalError {
    #[error("empty system")]
    Empty,

    #[error("dimension mismatch: diag has {n} rows, {name} has {got} entries (expected {expected})")]
    DimensionMismatch { name: &'static str, n: usize, got: usize, expected: usize },

    #[error("zero pivot at row {row}; system cannot be solved by forward sweep")]
    SingularPivot { row: usize },

    #[error("non-finite entry in `{name}` at index {idx}")]
    NonFiniteEntry { name: &'static str, idx: usize },

    #[error("poisson problem needs at least 2 intervals. got {got}")]
    TooFewIntervals { got: usize },
}
