//! Subcommand implementations.
//!
//! Each `run` writes its report to the given writer so the output can be
//! checked without a terminal.

pub mod advection;
pub mod cubic;
pub mod input;
pub mod integrate;
pub mod sqrt;
pub mod tridiagonal;
