//! Square roots by fixed-point iteration.
//!
//! `x² − s = 0` is rewritten as `x = g(x)` in two ways, see [`Scheme`].

pub mod config;
pub mod errors;
pub mod sqrt;

pub use config::FixedPointCfg;
pub use errors::FixedPointError;
pub use sqrt::{iterate, FixedPointReport, Scheme, Termination};
