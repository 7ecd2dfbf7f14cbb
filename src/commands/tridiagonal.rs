use std::io::Write;

use anyhow::Result;
use tracing::info;

use numlab::tridiagonal::poisson;

pub fn run<W: Write>(intervals: usize, left: f64, right: f64, table: bool, out: &mut W) -> Result<()> {
    let solution = poisson(intervals, left, right)?;
    let max_error = solution.max_error();
    info!(intervals, max_error, "poisson problem solved");

    writeln!(out, "Solved u'' = -2 on [0, 1], u(0) = {left}, u(1) = {right}, {intervals} intervals")?;
    writeln!(out, "max |approx - exact| = {max_error:e}")?;

    if table {
        writeln!(out, "x\tapprox\texact")?;
        for ((x, a), e) in solution.x.iter().zip(&solution.approx).zip(&solution.exact) {
            writeln!(out, "{x:.6}\t{a:.9}\t{e:.9}")?;
        }
    }
    Ok(())
}
