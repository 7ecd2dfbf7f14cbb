//! Fixed-point iteration for `√s`.
//!
//! ```text
//! x² − s = 0  ⇒  x = s / x                 (Scheme::Reciprocal)
//! x² − s = 0  ⇒  2x² = s + x²
//!             ⇒  x = (s / x + x) / 2       (Scheme::Averaged)
//! ```
//!
//! The reciprocal map has `|g'(√s)| = 1`, so it oscillates between `x₀`
//! and `s / x₀` forever unless `x₀` is already the root. The averaged map
//! is Heron's method and converges quadratically from any non-zero start.

use tracing::{debug, trace};

use super::config::FixedPointCfg;
use super::errors::FixedPointError;


/// Iteration maps for `x = g(x)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// `g(x) = s / x`
    Reciprocal,
    /// `g(x) = (s / x + x) / 2`
    Averaged,
}

impl Scheme {
    #[inline]
    pub fn apply(self, x: f64, s: f64) -> f64 {
        match self {
            Scheme::Reciprocal => s / x,
            Scheme::Averaged   => (s / x + x) / 2.0,
        }
    }

    pub const fn scheme_name(self) -> &'static str {
        match self {
            Scheme::Reciprocal => "reciprocal",
            Scheme::Averaged   => "averaged",
        }
    }
}
impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scheme_name())
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// |x_prev - x| < eps
    Converged,
    /// `max_steps` reached
    StepLimit,
}


/// Outcome of [`iterate`].
///
/// - `estimate`    : last iterate
/// - `steps`       : number of applications of `g`
/// - `x2`, `x10`   : iterates after 2 and 10 steps, if reached
/// - `diverged`    : some step after the first grew in magnitude
/// - `termination` : why the loop stopped
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointReport {
    pub scheme:      Scheme,
    pub estimate:    f64,
    pub steps:       usize,
    pub x2:          Option<f64>,
    pub x10:         Option<f64>,
    pub diverged:    bool,
    pub termination: Termination,
}


/// Iterates `scheme` from `start` toward `√s`.
///
/// The loop always performs at least one step and continues while
/// `|x_prev - x| >= eps` and `steps < max_steps`. An iterate of exactly 0
/// (only possible for `s = 0`) is the root and stops the loop.
///
/// A step is counted as growth when `|x| > |x_prev|`. The first step is
/// exempt since Heron's method overshoots from any start below `√s` and
/// then decreases monotonically.
///
/// # Errors
/// ├ [`FixedPointError::NegativeRadicand`] - `s < 0` or NaN
/// ├ [`FixedPointError::InvalidStart`]     - `start` is zero or non-finite
/// └ [`FixedPointError::NonFiniteIterate`] - an iterate became NaN or inf
pub fn iterate(
    scheme: Scheme,
    s:      f64,
    start:  f64,
    cfg:    FixedPointCfg,
) -> Result<FixedPointReport, FixedPointError> {
    if !s.is_finite() || s < 0.0 {
        return Err(FixedPointError::NegativeRadicand { got: s });
    }
    if !start.is_finite() || start == 0.0 {
        return Err(FixedPointError::InvalidStart { got: start });
    }

    let eps = cfg.eps();
    let max_steps = cfg.max_steps();

    let mut x_prev   = start;
    let mut x        = start;
    let mut delta    = f64::INFINITY;
    let mut steps    = 0;
    let mut x2       = None;
    let mut x10      = None;
    let mut diverged = false;

    while delta.abs() >= eps && steps < max_steps {
        x = scheme.apply(x_prev, s);
        steps += 1;
        if !x.is_finite() {
            return Err(FixedPointError::NonFiniteIterate { step: steps, x });
        }

        if steps > 1 && x.abs() > x_prev.abs() {
            diverged = true;
        }

        delta  = x_prev - x;
        x_prev = x;

        match steps {
            2  => x2 = Some(x),
            10 => x10 = Some(x),
            _  => {}
        }
        trace!(%scheme, steps, x, delta, "fixed-point step");

        // only reachable for s = 0, where 0 is the fixed point
        if x == 0.0 {
            break;
        }
    }

    let termination = if delta.abs() < eps || x == 0.0 {
        Termination::Converged
    } else {
        Termination::StepLimit
    };
    debug!(%scheme, s, start, estimate = x, steps, diverged, ?termination, "fixed-point iteration done");

    Ok(FixedPointReport {
        scheme,
        estimate: x,
        steps,
        x2,
        x10,
        diverged,
        termination,
    })
}
