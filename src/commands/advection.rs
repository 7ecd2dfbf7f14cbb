use std::io::Write;

use anyhow::Result;
use tracing::info;

use numlab::advection::{exact, solve, AdvectionCfg};

/// Runs every combination of node count, Courant number and speed.
pub fn run<W: Write>(nodes: &[usize], courant: &[f64], speed: &[f64], out: &mut W) -> Result<()> {
    for &n in nodes {
        for &r in courant {
            for &a in speed {
                writeln!(out, "Solving with parameters: nodes={n}, r={r}, a={a}")?;

                let cfg = AdvectionCfg::new(n, r, a)?;
                let approx = solve(&cfg)?;
                let reference = exact(&cfg)?;
                let max_error = approx.max_final_error(&reference);
                info!(nodes = n, courant = r, speed = a, max_error, "advection run finished");

                writeln!(
                    out,
                    "\tlayers={}, t_final={:.6}, max final error={max_error:.6}",
                    approx.t.len(),
                    approx.t.last().copied().unwrap_or_default(),
                )?;
            }
        }
    }
    Ok(())
}
