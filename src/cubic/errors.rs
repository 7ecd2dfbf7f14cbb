//! Cubic solver error types.
//!
//! ┌ Input errors         : raised before any computation
//! │  ├ non-numeric token while parsing coefficients
//! │  ├ wrong number of coefficients
//! │  └ non-finite coefficient
//! │
//! ├ Configuration errors : invalid `eps`, `max_doublings`, `max_iter`
//! │
//! └ Runtime errors
//!    ├ invalid search bracket
//!    ├ non-finite polynomial evaluation
//!    └ probe doubling ran out of range while looking for a bracket

use thiserror::Error;


/// Errors returned by [`crate::cubic`].
#[derive(Debug, Error, PartialEq)]
pub enum CubicError {
    #[error("invalid input: `{token}` is not a number")]
    InvalidInput { token: String },

    #[error("expected 3 coefficients (a, b, c), got {got}")]
    WrongArity { got: usize },

    #[error("coefficient `{name}` must be finite. got {got}")]
    NonFiniteCoefficient { name: &'static str, got: f64 },

    #[error("invalid `eps`: must be finite and > 0. got {got}")]
    InvalidEps { got: f64 },

    #[error("invalid max_doublings: must be >= 1. got {got}")]
    InvalidMaxDoublings { got: usize },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid bracket: l and r must be finite with l <= r. got [{l}, {r}]")]
    InvalidBounds { l: f64, r: f64 },

    #[error("polynomial non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("no bracket found doubling from {start}: stopped at probe={probe} after {doublings} doublings")]
    ProbeDiverged { start: f64, probe: f64, doublings: usize },
}
