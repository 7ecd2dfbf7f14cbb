use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuadratureError {
    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("number of sub-intervals must be >= 1")]
    ZeroIntervals,

    #[error("integrand non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("integral with {intervals} sub-intervals matches the exact value; order undefined")]
    ExactMatch { intervals: usize },

    #[error("exact value must be finite. got {got}")]
    NonFiniteExact { got: f64 },
}
