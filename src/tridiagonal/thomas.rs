//! Thomas algorithm (tridiagonal matrix algorithm).
//!
//! Row `i` of the system reads
//!
//! ```text
//! lower[i-1]·x[i-1] + diag[i]·x[i] + upper[i]·x[i+1] = rhs[i]
//! ```
//!
//! The forward sweep writes every unknown as `x[i] = α[i]·x[i+1] + β[i]`;
//! back substitution then starts from `x[n-1] = β[n-1]`.

use super::errors::TridiagonalError;


fn check_len(name: &'static str, v: &[f64], n: usize, expected: usize) -> Result<(), TridiagonalError> {
    if v.len() != expected {
        return Err(TridiagonalError::DimensionMismatch { name, n, got: v.len(), expected });
    }
    if let Some(idx) = v.iter().position(|x| !x.is_finite()) {
        return Err(TridiagonalError::NonFiniteEntry { name, idx });
    }
    Ok(())
}


/// Solves a tridiagonal system in O(n).
///
/// # Arguments
/// ┌ `lower` - sub-diagonal, `n - 1` entries
/// ├ `diag`  - main diagonal, `n` entries
/// ├ `upper` - super-diagonal, `n - 1` entries
/// └ `rhs`   - right-hand side, `n` entries
///
/// # Errors
/// ├ [`TridiagonalError::Empty`]             - `diag` is empty
/// ├ [`TridiagonalError::DimensionMismatch`] - band lengths inconsistent with `diag`
/// ├ [`TridiagonalError::NonFiniteEntry`]    - NaN or inf coefficient
/// └ [`TridiagonalError::SingularPivot`]     - a sweep denominator is exactly zero
///
/// # Notes
/// No pivoting is performed; the sweep is stable for diagonally dominant
/// systems and may lose accuracy otherwise.
pub fn solve(
    lower: &[f64],
    diag:  &[f64],
    upper: &[f64],
    rhs:   &[f64],
) -> Result<Vec<f64>, TridiagonalError> {
    let n = diag.len();
    if n == 0 {
        return Err(TridiagonalError::Empty);
    }
    check_len("diag", diag, n, n)?;
    check_len("lower", lower, n, n - 1)?;
    check_len("upper", upper, n, n - 1)?;
    check_len("rhs", rhs, n, n)?;

    let mut alpha = vec![0.0; n];
    let mut beta  = vec![0.0; n];

    for i in 0..n {
        let (denom, carried) = if i == 0 {
            (diag[0], rhs[0])
        } else {
            (
                diag[i] + lower[i - 1] * alpha[i - 1],
                rhs[i] - lower[i - 1] * beta[i - 1],
            )
        };
        if denom == 0.0 {
            return Err(TridiagonalError::SingularPivot { row: i });
        }
        if i + 1 < n {
            alpha[i] = -upper[i] / denom;
        }
        beta[i] = carried / denom;
    }

    let mut x = vec![0.0; n];
    x[n - 1] = beta[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = alpha[i] * x[i + 1] + beta[i];
    }

    Ok(x)
}
