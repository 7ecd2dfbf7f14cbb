//! Configuration for the cubic solver and its bisection searches.
//!
//! [`CubicCfg`] fields
//! ├ `eps`           : sign-classification tolerance and bisection width threshold
//! ├ `max_doublings` : cap on probe doublings for unbounded searches
//! └ `max_iter`      : optional cap on bisection halvings
//!
//! If `max_iter` is `None` the searches use the theoretical number of
//! halvings for the bracket, capped by [`GLOBAL_MAX_ITER_FALLBACK`].

use super::errors::CubicError;


/// Default tolerance shared by the classifier and the bisection loop.
pub const DEFAULT_EPS: f64 = 1e-9;

/// Enough doublings to walk a probe of magnitude 1 across the whole f64 exponent range.
pub const DEFAULT_MAX_DOUBLINGS: usize = 1024;

/// Hard cap on theoretical bisection iteration counts.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 2_000;


/// Cubic solver configuration.
///
/// # Defaults
///
/// ┌ DEFAULT_EPS           - 1e-9
/// ├ DEFAULT_MAX_DOUBLINGS - 1024
/// └ max_iter              - None (theoretical bound)
///
/// # Validation
/// └ Performed by [`crate::cubic::solve_with`] via [`CubicCfg::validate`].
///    ├ `eps` > 0 and finite
///    ├ `max_doublings` >= 1
///    └ `max_iter` is `None` or >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicCfg {
    eps:           Option<f64>,
    max_doublings: Option<usize>,
    max_iter:      Option<usize>,
}

impl CubicCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_eps(mut self, v: f64)             -> Self { self.eps = Some(v); self }
    pub fn with_max_doublings(mut self, v: usize) -> Self { self.max_doublings = Some(v); self }
    pub fn with_max_iter(mut self, v: usize)      -> Self { self.max_iter = Some(v); self }

    #[inline] #[must_use] pub fn eps(&self) -> f64 { self.eps.unwrap_or(DEFAULT_EPS) }
    #[inline] #[must_use] pub fn max_doublings(&self) -> usize { self.max_doublings.unwrap_or(DEFAULT_MAX_DOUBLINGS) }
    #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    pub fn validate(&self) -> Result<CubicCfg, CubicError> {
        let eps = self.eps();
        if !(eps.is_finite() && eps > 0.0) {
            return Err(CubicError::InvalidEps { got: eps });
        }

        let max_doublings = self.max_doublings();
        if max_doublings == 0 {
            return Err(CubicError::InvalidMaxDoublings { got: 0 });
        }

        let max_iter = match self.max_iter {
            None    => None,
            Some(0) => return Err(CubicError::InvalidMaxIter { got: 0 }),
            Some(n) => Some(n),
        };

        Ok(Self {
            eps:           Some(eps),
            max_doublings: Some(max_doublings),
            max_iter,
        })
    }
}

impl Default for CubicCfg {
    fn default() -> Self {
        Self {
            eps:           Some(DEFAULT_EPS),
            max_doublings: Some(DEFAULT_MAX_DOUBLINGS),
            max_iter:      None,
        }
    }
}


/// Theoretical number of halvings to shrink `[l, r]` below `eps`.
pub(crate) fn theoretical_iter(l: f64, r: f64, eps: f64) -> usize {
    let w0 = r - l;
    if w0 < eps {
        return 0;
    }
    let n = (w0 / eps).log2().ceil();
    if n.is_finite() { n as usize + 1 } else { GLOBAL_MAX_ITER_FALLBACK }
}
