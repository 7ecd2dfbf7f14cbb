//! Empirical convergence order.
//!
//! Halving the step of a rule with global error `C·hᵖ` divides the error
//! by `2ᵖ`, so `p ≈ log2(|Iₙ − I| / |I₂ₙ − I|)`.

use tracing::debug;

use super::errors::QuadratureError;
use super::rules::{integrate, Rule};


/// Estimates the convergence order of `rule` on `func` over `[a, b]`
/// from `n` and `2n` sub-intervals, given the exact integral `exact`.
///
/// # Errors
/// ├ [`QuadratureError::NonFiniteExact`] - `exact` is NaN or inf
/// ├ [`QuadratureError::ExactMatch`]     - either estimate has zero error
/// └ everything [`integrate`] returns
pub fn error_order<F>(
    rule:     Rule,
    mut func: F,
    exact:    f64,
    a:        f64,
    b:        f64,
    n:        usize,
) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    if !exact.is_finite() {
        return Err(QuadratureError::NonFiniteExact { got: exact });
    }

    let full = integrate(rule, &mut func, a, b, n)?;
    let half = integrate(rule, &mut func, a, b, 2 * n)?;

    let full_error = (full.value - exact).abs();
    let half_error = (half.value - exact).abs();

    if full_error == 0.0 {
        return Err(QuadratureError::ExactMatch { intervals: n });
    }
    if half_error == 0.0 {
        return Err(QuadratureError::ExactMatch { intervals: 2 * n });
    }

    let order = (full_error / half_error).log2();
    debug!(%rule, n, full_error, half_error, order, "estimated error order");
    Ok(order)
}
