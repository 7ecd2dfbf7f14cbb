//! Grid parameters for the advection problem.
//!
//! [`AdvectionCfg`]
//! ├ `nodes`   : spatial nodes on [X_LEFT, X_RIGHT]
//! ├ `courant` : r = a·τ/h, fixes the time step τ
//! └ `speed`   : advection speed a

use super::errors::AdvectionError;

pub const X_LEFT:  f64 = -10.0;
pub const X_RIGHT: f64 = 10.0;
pub const T_START: f64 = 0.0;
pub const T_END:   f64 = 1.0;

/// Upper bound on time layers, guards against tiny Courant numbers.
pub const MAX_LAYERS: usize = 1_000_000;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AdvectionCfg {
    nodes:   usize,
    courant: f64,
    speed:   f64,
}

impl AdvectionCfg {
    pub fn new(nodes: usize, courant: f64, speed: f64) -> Result<Self, AdvectionError> {
        if nodes < 2 {
            return Err(AdvectionError::TooFewNodes { got: nodes });
        }
        if !(courant.is_finite() && courant > 0.0) {
            return Err(AdvectionError::InvalidCourant { got: courant });
        }
        if !(speed.is_finite() && speed > 0.0) {
            return Err(AdvectionError::InvalidSpeed { got: speed });
        }
        Ok(Self { nodes, courant, speed })
    }

    pub fn nodes(&self)   -> usize { self.nodes }
    pub fn courant(&self) -> f64   { self.courant }
    pub fn speed(&self)   -> f64   { self.speed }

    /// Spatial step h.
    pub fn h(&self) -> f64 {
        (X_RIGHT - X_LEFT) / (self.nodes - 1) as f64
    }

    /// Time step τ = r·h/a.
    pub fn tau(&self) -> f64 {
        self.courant * self.h() / self.speed
    }

    /// Number of time layers, `ceil((T_END − T_START)/τ) + 1`.
    pub fn layers(&self) -> Result<usize, AdvectionError> {
        let layers = ((T_END - T_START) / self.tau()).ceil() + 1.0;
        if !layers.is_finite() || layers > MAX_LAYERS as f64 {
            return Err(AdvectionError::TooManyLayers { layers });
        }
        Ok(layers as usize)
    }
}
