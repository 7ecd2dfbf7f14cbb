//! Composite quadrature rules for definite integrals.
//!
//! ┌ [`rules`] : trapezoidal and Simpson rules over `n` equal sub-intervals
//! └ [`order`] : empirical convergence order from halving the step

pub mod errors;
pub mod order;
pub mod rules;

pub use errors::QuadratureError;
pub use order::error_order;
pub use rules::{integrate, simpson, trapezoidal, QuadratureReport, Rule};
