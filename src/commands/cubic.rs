use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use numlab::cubic::{self, Cubic};

use super::input::prompt_line;

pub fn run<R, W>(coefficients: &[String], input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let line = if coefficients.is_empty() {
        prompt_line("Enter the coefficients a, b, c:", input, out)?
    } else {
        coefficients.join(" ")
    };

    let poly: Cubic = line.parse()?;
    info!(%poly, "solving cubic");

    let report = cubic::solve(poly)?;
    info!(shape = ?report.shape, evals = report.evals, "cubic solved");

    write!(out, "{report}")?;
    Ok(())
}
