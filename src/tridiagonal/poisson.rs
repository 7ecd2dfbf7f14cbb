//! `u'' = −2` on `[0, 1]` with Dirichlet boundary values.
//!
//! Central differences on `N` equal intervals give
//!
//! ```text
//! u[j-1] − 2u[j] + u[j+1] = −2h²,   j = 1..N-1
//! u[0] = left,  u[N] = right
//! ```
//!
//! The exact solution is `−x² + (right − left + 1)·x + left`. Being a
//! quadratic, it is reproduced by the stencil up to rounding.

use tracing::debug;

use super::errors::TridiagonalError;
use super::thomas::solve;


/// Grid, approximation and exact values of the Poisson problem.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonSolution {
    pub x:      Vec<f64>,
    pub approx: Vec<f64>,
    pub exact:  Vec<f64>,
}

impl PoissonSolution {
    /// Largest `|approx − exact|` over the grid.
    pub fn max_error(&self) -> f64 {
        self.approx
            .iter()
            .zip(&self.exact)
            .map(|(a, e)| (a - e).abs())
            .fold(0.0, f64::max)
    }
}


/// Solves the problem on `intervals` equal intervals (`intervals + 1` nodes).
///
/// # Errors
/// ├ [`TridiagonalError::TooFewIntervals`] - fewer than 2 intervals
/// └ everything [`solve`] returns
pub fn poisson(intervals: usize, left: f64, right: f64) -> Result<PoissonSolution, TridiagonalError> {
    if intervals < 2 {
        return Err(TridiagonalError::TooFewIntervals { got: intervals });
    }

    let n = intervals + 1;
    let h = 1.0 / intervals as f64;

    let mut lower = vec![1.0; n - 1];
    let mut diag  = vec![-2.0; n];
    let mut upper = vec![1.0; n - 1];
    let mut rhs   = vec![-2.0 * h * h; n];

    diag[0]  = 1.0;
    upper[0] = 0.0;
    rhs[0]   = left;

    diag[n - 1]  = 1.0;
    lower[n - 2] = 0.0;
    rhs[n - 1]   = right;

    let approx = solve(&lower, &diag, &upper, &rhs)?;

    let x: Vec<f64> = (0..n).map(|j| j as f64 * h).collect();
    let exact = x
        .iter()
        .map(|&xj| -xj * xj + (right - left + 1.0) * xj + left)
        .collect();

    let solution = PoissonSolution { x, approx, exact };
    debug!(intervals, left, right, max_error = solution.max_error(), "poisson solved");
    Ok(solution)
}
