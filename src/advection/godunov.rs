//! Godunov upwind scheme for `u_t + a·u_x = 0`, `a > 0`.
//!
//! ```text
//! u[n+1][i] = u[n][i] − r·(u[n][i] − u[n][i-1]),   i >= 1
//! u[n+1][0] = v(X_LEFT)
//! ```
//!
//! The left boundary stays at the upstream value of the shelf, which is
//! constant for every x < 0.

use tracing::{debug, warn};

use super::config::{AdvectionCfg, T_START, X_LEFT};
use super::errors::AdvectionError;


/// Tolerance used to place the step of the shelf.
pub const SHELF_EPS: f64 = 1e-9;


/// "Shelf" initial profile: 3 for x < eps, 1 otherwise.
#[inline]
pub fn shelf(x: f64) -> f64 {
    if x < SHELF_EPS { 3.0 } else { 1.0 }
}


/// Space-time grid of values, one row per time layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub x:      Vec<f64>,
    pub t:      Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl Grid {
    fn axes(cfg: &AdvectionCfg) -> Result<(Vec<f64>, Vec<f64>), AdvectionError> {
        let h   = cfg.h();
        let tau = cfg.tau();
        let x = (0..cfg.nodes()).map(|i| X_LEFT + i as f64 * h).collect();
        let t = (0..cfg.layers()?).map(|n| T_START + n as f64 * tau).collect();
        Ok((x, t))
    }

    pub fn last_layer(&self) -> &[f64] {
        self.values.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Largest `|self − other|` on the final time layer.
    pub fn max_final_error(&self, other: &Grid) -> f64 {
        self.last_layer()
            .iter()
            .zip(other.last_layer())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}


/// Marches the upwind scheme from the shelf profile to the last layer.
///
/// # Notes
/// Courant numbers above 1 are accepted and logged; the scheme is then
/// unstable and the solution oscillates with growing amplitude.
pub fn solve(cfg: &AdvectionCfg) -> Result<Grid, AdvectionError> {
    let r = cfg.courant();
    if r > 1.0 {
        warn!(courant = r, "Courant number above 1, upwind scheme is unstable");
    }

    let (x, t) = Grid::axes(cfg)?;
    let mut values = Vec::with_capacity(t.len());
    values.push(x.iter().map(|&xi| shelf(xi)).collect::<Vec<f64>>());

    for _ in 1..t.len() {
        let prev = &values[values.len() - 1];
        let mut next = Vec::with_capacity(prev.len());
        next.push(shelf(X_LEFT));
        for i in 1..prev.len() {
            next.push(prev[i] - r * (prev[i] - prev[i - 1]));
        }
        values.push(next);
    }

    debug!(nodes = x.len(), layers = t.len(), courant = r, speed = cfg.speed(), "advection solved");
    Ok(Grid { x, t, values })
}

/// Exact solution `u(x, t) = v(x − a·t)` on the same grid as [`solve`].
pub fn exact(cfg: &AdvectionCfg) -> Result<Grid, AdvectionError> {
    let a = cfg.speed();
    let (x, t) = Grid::axes(cfg)?;
    let values = t
        .iter()
        .map(|&tn| x.iter().map(|&xi| shelf(xi - a * tn)).collect())
        .collect();
    Ok(Grid { x, t, values })
}
