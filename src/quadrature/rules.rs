//! Composite Newton–Cotes rules.
//!
//! The interval `[a, b]` is split into `n` sub-intervals of width
//! `h = (b - a) / n`; node `i` is computed as `a + i·h` rather than by
//! accumulating `h`, so exactly `n` panels are summed.
//!
//! ┌ [`Rule::Trapezoidal`] : Σ h·(f(xᵢ) + f(xᵢ₊₁)) / 2
//! └ [`Rule::Simpson`]     : Σ h·(f(xᵢ) + 4·f(mᵢ) + f(xᵢ₊₁)) / 6

use tracing::trace;

use super::errors::QuadratureError;


/// Quadrature rule variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    Trapezoidal,
    Simpson,
}

impl Rule {
    pub const fn rule_name(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "trapezoidal",
            Rule::Simpson     => "simpson",
        }
    }

    /// Asymptotic order of the global error for smooth integrands.
    pub const fn theoretical_order(self) -> u32 {
        match self {
            Rule::Trapezoidal => 2,
            Rule::Simpson     => 4,
        }
    }
}
impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_name())
    }
}


/// Result of one quadrature run.
///
/// - `rule`      : rule used
/// - `intervals` : number of sub-intervals `n`
/// - `value`     : integral estimate
/// - `evals`     : integrand evaluations
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadratureReport {
    pub rule:      Rule,
    pub intervals: usize,
    pub value:     f64,
    pub evals:     usize,
}


/// Integrates `func` over `[a, b]` with `n` sub-intervals using `rule`.
///
/// # Errors
/// ├ [`QuadratureError::InvalidBounds`]       - non-finite bounds or `a >= b`
/// ├ [`QuadratureError::ZeroIntervals`]       - `n == 0`
/// └ [`QuadratureError::NonFiniteEvaluation`] - `func` produced NaN or inf
pub fn integrate<F>(
    rule:     Rule,
    mut func: F,
    a:        f64,
    b:        f64,
    n:        usize,
) -> Result<QuadratureReport, QuadratureError>
where F: FnMut(f64) -> f64 {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(QuadratureError::InvalidBounds { a, b });
    }
    if n == 0 {
        return Err(QuadratureError::ZeroIntervals);
    }

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, QuadratureError> {
        evals += 1;
        let fx = func(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(QuadratureError::NonFiniteEvaluation { x, fx })
        }
    };

    let h = (b - a) / n as f64;
    let node = |i: usize| if i == n { b } else { a + i as f64 * h };

    let mut value = 0.0;
    let mut f_left = eval(a)?;
    for i in 0..n {
        let (x1, x2) = (node(i), node(i + 1));
        let f_right = eval(x2)?;

        value += match rule {
            Rule::Trapezoidal => h * (f_left + f_right) / 2.0,
            Rule::Simpson => {
                let f_mid = eval((x1 + x2) / 2.0)?;
                h * (f_left + 4.0 * f_mid + f_right) / 6.0
            }
        };
        f_left = f_right;
    }

    trace!(%rule, a, b, n, value, "integrated");
    Ok(QuadratureReport { rule, intervals: n, value, evals })
}

/// [`integrate`] with [`Rule::Trapezoidal`].
pub fn trapezoidal<F>(func: F, a: f64, b: f64, n: usize) -> Result<QuadratureReport, QuadratureError>
where F: FnMut(f64) -> f64 {
    integrate(Rule::Trapezoidal, func, a, b, n)
}

/// [`integrate`] with [`Rule::Simpson`].
pub fn simpson<F>(func: F, a: f64, b: f64, n: usize) -> Result<QuadratureReport, QuadratureError>
where F: FnMut(f64) -> f64 {
    integrate(Rule::Simpson, func, a, b, n)
}
