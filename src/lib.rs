//! Educational numerical methods.
//!
//! ┌ [`cubic`]       : real roots of monic cubics by shape analysis + bisection
//! ├ [`quadrature`]  : trapezoidal and Simpson rules, empirical error order
//! ├ [`fixed_point`] : square roots by two fixed-point iteration schemes
//! ├ [`tridiagonal`] : Thomas algorithm and a 1-D Poisson problem
//! └ [`advection`]   : upwind (Godunov) scheme for linear advection
//!
//! The modules are independent of each other.

pub mod advection;
pub mod cubic;
pub mod fixed_point;
pub mod quadrature;
pub mod tridiagonal;
