//! Tridiagonal linear systems by the Thomas algorithm, plus the 1-D
//! Poisson problem that exercises it.

pub mod errors;
pub mod poisson;
pub mod thomas;

pub use errors::TridiagonalError;
pub use poisson::{poisson, PoissonSolution};
pub use thomas::solve;
