use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FixedPointError {
    #[error("cannot take the square root of a negative value. got {got}")]
    NegativeRadicand { got: f64 },

    #[error("invalid start value: must be finite and non-zero. got {got}")]
    InvalidStart { got: f64 },

    #[error("invalid `eps`: must be finite and > 0. got {got}")]
    InvalidEps { got: f64 },

    #[error("invalid max_steps: must be >= 1. got {got}")]
    InvalidMaxSteps { got: usize },

    #[error("iterate non-finite at step {step}: x={x}")]
    NonFiniteIterate { step: usize, x: f64 },
}
