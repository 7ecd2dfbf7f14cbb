//! Bisection searches for `u` with `f(u) ≈ 0`.
//!
//! ┌ [`search_increasing`]      : f non-decreasing on [l, r]
//! ├ [`search_decreasing`]      : f non-increasing on [l, r]
//! ├ [`search_left_unbounded`]  : f increasing on (-inf, r]
//! └ [`search_right_unbounded`] : f increasing on [l, +inf)
//!
//! The unbounded variants double a probe away from the known bound until
//! the function changes side, then delegate to [`search_increasing`].
//! All variants classify values with [`Sign::classify`] under `cfg.eps()`,
//! which is also the bracket-width stopping threshold.

use tracing::{debug, trace};

use super::config::{theoretical_iter, CubicCfg, GLOBAL_MAX_ITER_FALLBACK};
use super::errors::CubicError;
use super::report::{SearchReport, Termination};
use super::signs::Sign;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Monotonicity {
    Increasing,
    Decreasing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}


/// Midpoint of [l, r], halving before adding so `r - l` cannot overflow
#[inline]
fn midpoint(l: f64, r: f64) -> f64 {
    0.5 * l + 0.5 * r
}

/// Counts evaluations and rejects non-finite values.
pub(crate) struct Counted<'f, F> {
    func:      &'f mut F,
    pub(crate) evals: usize,
}

impl<'f, F> Counted<'f, F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: &'f mut F) -> Self {
        Self { func, evals: 0 }
    }

    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, CubicError> {
        self.evals += 1;
        let fx = (self.func)(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(CubicError::NonFiniteEvaluation { x, fx })
        }
    }
}


fn check_bounds(l: f64, r: f64) -> Result<(), CubicError> {
    if !(l.is_finite() && r.is_finite()) || l > r {
        return Err(CubicError::InvalidBounds { l, r });
    }
    Ok(())
}


/// Shared halving loop.
///
/// Keeps halving while `l <= r - eps`. A midpoint classified as zero is
/// returned immediately; otherwise the half consistent with `shape` is kept
/// and the final midpoint is returned.
fn bisect<F>(
    func:  &mut F,
    mut l: f64,
    mut r: f64,
    cfg:   &CubicCfg,
    shape: Monotonicity,
) -> Result<SearchReport, CubicError>
where F: FnMut(f64) -> f64 {
    let eps = cfg.eps();
    let num_iter = match cfg.max_iter() {
        Some(m) => m,
        None    => theoretical_iter(l, r, eps).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut f = Counted::new(func);
    let mut iterations  = 0;
    let mut termination = Termination::WidthReached;

    while l <= r - eps {
        if iterations == num_iter {
            termination = Termination::IterationLimit;
            break;
        }

        let m = midpoint(l, r);
        if !(l < m && m < r) {
            termination = Termination::MachinePrecisionReached;
            break;
        }

        iterations += 1;
        let fm = f.eval(m)?;

        match (Sign::classify(fm, eps), shape) {
            (Sign::Zero, _) => {
                return Ok(SearchReport {
                    root:        m,
                    f_root:      fm,
                    iterations,
                    evals:       f.evals,
                    doublings:   0,
                    left:        l,
                    right:       r,
                    termination: Termination::ZeroReached,
                });
            }
            (Sign::Positive, Monotonicity::Increasing)
            | (Sign::Negative, Monotonicity::Decreasing) => r = m,
            (Sign::Negative, Monotonicity::Increasing)
            | (Sign::Positive, Monotonicity::Decreasing) => l = m,
        }
    }

    let root   = midpoint(l, r);
    let f_root = f.eval(root)?;

    Ok(SearchReport {
        root,
        f_root,
        iterations,
        evals: f.evals,
        doublings: 0,
        left: l,
        right: r,
        termination,
    })
}


/// Doubles a probe starting at `start` until f leaves the side that
/// still has the root beyond it.
///
/// - [`Side::Left`]  : stops once f(probe) is not positive
/// - [`Side::Right`] : stops once f(probe) is not negative
///
/// # Returns
/// `(probe, doublings, evals)`
fn expand<F>(
    func:  &mut F,
    start: f64,
    side:  Side,
    cfg:   &CubicCfg,
) -> Result<(f64, usize, usize), CubicError>
where F: FnMut(f64) -> f64 {
    let eps = cfg.eps();
    let max_doublings = cfg.max_doublings();

    let mut probe     = start;
    let mut doublings = 0;
    let mut evals     = 0;

    loop {
        evals += 1;
        let fp = func(probe);
        if !fp.is_finite() {
            return Err(CubicError::ProbeDiverged { start, probe, doublings });
        }

        let keep_going = match side {
            Side::Left  => Sign::classify(fp, eps).is_positive(),
            Side::Right => Sign::classify(fp, eps).is_negative(),
        };
        if !keep_going {
            return Ok((probe, doublings, evals));
        }
        if doublings == max_doublings {
            return Err(CubicError::ProbeDiverged { start, probe, doublings });
        }

        probe *= 2.0;
        doublings += 1;
        trace!(probe, fp, ?side, "probe doubled");
    }
}


/// Bisection for a non-decreasing `func` on `[l, r]` with `f(l) <= 0 <= f(r)` up to eps.
///
/// # Errors
/// ├ [`CubicError::InvalidBounds`]       - non-finite bounds or `l > r`
/// ├ [`CubicError::NonFiniteEvaluation`] - `func` produced NaN or inf
/// └ configuration errors from [`CubicCfg::validate`]
pub fn search_increasing<F>(mut func: F, l: f64, r: f64, cfg: CubicCfg) -> Result<SearchReport, CubicError>
where F: FnMut(f64) -> f64 {
    check_bounds(l, r)?;
    let cfg = cfg.validate()?;
    bisect(&mut func, l, r, &cfg, Monotonicity::Increasing)
}

/// Bisection for a non-increasing `func` on `[l, r]` with `f(l) >= 0 >= f(r)` up to eps.
///
/// Errors as in [`search_increasing`].
pub fn search_decreasing<F>(mut func: F, l: f64, r: f64, cfg: CubicCfg) -> Result<SearchReport, CubicError>
where F: FnMut(f64) -> f64 {
    check_bounds(l, r)?;
    let cfg = cfg.validate()?;
    bisect(&mut func, l, r, &cfg, Monotonicity::Decreasing)
}

/// Root of an increasing `func` somewhere on `(-inf, r]`.
///
/// The left bound is found by doubling `min(r, -1)` until `f(probe) <= 0`
/// (up to eps), then [`search_increasing`] runs on `[probe, r]`.
///
/// # Errors
/// ├ [`CubicError::ProbeDiverged`] - probe became non-finite or `max_doublings` was spent
/// └ everything [`search_increasing`] returns
pub fn search_left_unbounded<F>(mut func: F, r: f64, cfg: CubicCfg) -> Result<SearchReport, CubicError>
where F: FnMut(f64) -> f64 {
    check_bounds(r, r)?;
    let cfg = cfg.validate()?;

    let (l, doublings, probe_evals) = expand(&mut func, r.min(-1.0), Side::Left, &cfg)?;
    let mut report = bisect(&mut func, l, r, &cfg, Monotonicity::Increasing)?;
    report.evals += probe_evals;
    report.doublings = doublings;

    debug!(l, r, root = report.root, doublings, "left-unbounded search done");
    Ok(report)
}

/// Root of an increasing `func` somewhere on `[l, +inf)`.
///
/// Mirror of [`search_left_unbounded`]: doubles `max(l, 1)` until
/// `f(probe) >= 0` (up to eps), then bisects `[l, probe]`.
pub fn search_right_unbounded<F>(mut func: F, l: f64, cfg: CubicCfg) -> Result<SearchReport, CubicError>
where F: FnMut(f64) -> f64 {
    check_bounds(l, l)?;
    let cfg = cfg.validate()?;

    let (r, doublings, probe_evals) = expand(&mut func, l.max(1.0), Side::Right, &cfg)?;
    let mut report = bisect(&mut func, l, r, &cfg, Monotonicity::Increasing)?;
    report.evals += probe_evals;
    report.doublings = doublings;

    debug!(l, r, root = report.root, doublings, "right-unbounded search done");
    Ok(report)
}
