//! Reports returned by the cubic solver and its searches.
//!
//! ┌ [`SearchReport`] : one bisection search (root estimate + bookkeeping)
//! └ [`CubicReport`]  : full solve (roots, shape, discriminant, evals)

use std::fmt;

use super::signs::Sign;


/// Digits printed after the decimal point.
pub const PRINT_DIGITS: usize = 5;


/// Reasons a bisection search may terminate.
///
/// ├ [`Termination::ZeroReached`]             : f(midpoint) classified as zero
/// ├ [`Termination::WidthReached`]            : r - l < eps
/// ├ [`Termination::MachinePrecisionReached`] : no float strictly inside (l, r)
/// └ [`Termination::IterationLimit`]          : `max_iter` halvings spent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ZeroReached,
    WidthReached,
    MachinePrecisionReached,
    IterationLimit,
}


/// Outcome of a single bisection search.
///
/// [`SearchReport`]
/// - `root`        : root estimate
/// - `f_root`      : f(root)
/// - `iterations`  : halvings performed
/// - `evals`       : function evaluations, probes included
/// - `doublings`   : probe doublings (0 for bounded searches)
/// - `left`, `right` : final bracket
/// - `termination` : why the search stopped
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchReport {
    pub root:        f64,
    pub f_root:      f64,
    pub iterations:  usize,
    pub evals:       usize,
    pub doublings:   usize,
    pub left:        f64,
    pub right:       f64,
    pub termination: Termination,
}


/// A real root and its multiplicity (1, 2 or 3).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Root {
    pub value:        f64,
    pub multiplicity: u8,
}

impl Root {
    pub const fn new(value: f64, multiplicity: u8) -> Self {
        Self { value, multiplicity }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$}, multiplicity = {}",
            prettify(self.value),
            self.multiplicity,
            prec = PRINT_DIGITS
        )
    }
}


/// Which branch of the case analysis produced the roots.
///
/// ┌ [`Shape::Monotonic`]     : derivative discriminant <= 0, one root ×3
/// ├ [`Shape::SingleLeft`]    : f(α) > 0, f(β) > 0
/// ├ [`Shape::TouchingRight`] : f(α) > 0, f(β) = 0
/// ├ [`Shape::Collapsed`]     : f(α) = 0, f(β) = 0
/// ├ [`Shape::ThreeSimple`]   : f(α) > 0, f(β) < 0
/// ├ [`Shape::TouchingLeft`]  : f(α) = 0, f(β) < 0
/// ├ [`Shape::SingleRight`]   : f(α) < 0, f(β) < 0
/// └ [`Shape::Inconsistent`]  : any other pattern, no roots emitted
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
    Monotonic,
    SingleLeft,
    TouchingRight,
    Collapsed,
    ThreeSimple,
    TouchingLeft,
    SingleRight,
    Inconsistent { f_alpha: Sign, f_beta: Sign },
}


/// Result of [`crate::cubic::solve_with`].
///
/// [`CubicReport`]
/// - `roots`             : roots in discovery order (left to right)
/// - `shape`             : branch of the case analysis taken
/// - `discriminant`      : discriminant of the derivative
/// - `stationary_points` : `(α, β)` when the discriminant is positive
/// - `evals`             : total polynomial evaluations
#[derive(Debug, Clone, PartialEq)]
pub struct CubicReport {
    pub roots:             Vec<Root>,
    pub shape:             Shape,
    pub discriminant:      f64,
    pub stationary_points: Option<(f64, f64)>,
    pub evals:             usize,
}

impl CubicReport {
    /// Sum of multiplicities.
    pub fn total_multiplicity(&self) -> u32 {
        self.roots.iter().map(|r| u32::from(r.multiplicity)).sum()
    }

    pub fn values(&self) -> Vec<f64> {
        self.roots.iter().map(|r| r.value).collect()
    }
}

/// ```text
/// Found 3 root(s):
/// 1.00000, multiplicity = 1
/// 2.00000, multiplicity = 1
/// 3.00000, multiplicity = 1
/// ```
impl fmt::Display for CubicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} root(s):", self.roots.len())?;
        for root in &self.roots {
            writeln!(f, "{root}")?;
        }
        Ok(())
    }
}


/// Maps values within ±10⁻⁵ of zero to exactly `0.0` so they never print as `-0.00000`.
pub fn prettify(x: f64) -> f64 {
    let print_error = 10f64.powi(-(PRINT_DIGITS as i32));
    if -print_error < x && x < print_error {
        0.0
    } else {
        x
    }
}
