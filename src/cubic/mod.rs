//! Real roots of monic cubics `x³ + a·x² + b·x + c`.
//!
//! [`solve`] classifies the shape of the cubic from its stationary points and
//! runs a bisection search on each monotonic piece that contains a root.

// common helpers
pub mod config;
pub mod errors;
pub mod polynomial;
pub mod report;
pub mod signs;

// algorithms
pub mod search;
pub mod solver;

pub use config::CubicCfg;
pub use errors::CubicError;
pub use polynomial::Cubic;
pub use report::{CubicReport, Root, Shape};
pub use signs::Sign;
pub use solver::{solve, solve_with};
