//! Linear advection `u_t + a·u_x = 0` by Godunov's (upwind) scheme.
//!
//! The initial profile is a step ("shelf") that the exact solution carries
//! to the right at speed `a`; comparing the two shows the numerical
//! diffusion of the scheme and its instability for Courant numbers above 1.

pub mod config;
pub mod errors;
pub mod godunov;

pub use config::AdvectionCfg;
pub use errors::AdvectionError;
pub use godunov::{exact, shelf, solve, Grid};
