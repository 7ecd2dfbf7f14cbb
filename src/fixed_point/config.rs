//! Configuration for fixed-point iteration.
//!
//! [`FixedPointCfg`]
//! ├ `eps`       : stop once |x_prev - x| < eps
//! └ `max_steps` : iteration cap, a diverging scheme never meets `eps`

use super::errors::FixedPointError;

pub const DEFAULT_EPS: f64 = 1e-9;
pub const DEFAULT_MAX_STEPS: usize = 10_000;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointCfg {
    eps:       f64,
    max_steps: usize,
}

impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_eps(mut self, v: f64) -> Result<Self, FixedPointError> {
        if !(v.is_finite() && v > 0.0) {
            return Err(FixedPointError::InvalidEps { got: v });
        }
        self.eps = v;
        Ok(self)
    }

    pub fn set_max_steps(mut self, v: usize) -> Result<Self, FixedPointError> {
        if v == 0 {
            return Err(FixedPointError::InvalidMaxSteps { got: v });
        }
        self.max_steps = v;
        Ok(self)
    }

    pub fn eps(&self)       -> f64   { self.eps }
    pub fn max_steps(&self) -> usize { self.max_steps }
}

impl Default for FixedPointCfg {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS, max_steps: DEFAULT_MAX_STEPS }
    }
}
