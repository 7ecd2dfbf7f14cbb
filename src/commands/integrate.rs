use std::io::Write;

use anyhow::Result;
use tracing::info;

use numlab::quadrature::{error_order, integrate, Rule};

const PRINT_DIGITS: usize = 9;

fn exp(x: f64) -> f64 {
    x.exp()
}

/// Integrates e^x on `[from, to]` for each interval count and reports the
/// empirical error order of both rules.
pub fn run<W: Write>(from: f64, to: f64, intervals: &[usize], out: &mut W) -> Result<()> {
    let exact = to.exp() - from.exp();
    let p = PRINT_DIGITS;

    writeln!(out, "True integral:\n\t{exact:.p$}")?;

    for &n in intervals {
        let trapeze = integrate(Rule::Trapezoidal, exp, from, to, n)?;
        let simpson = integrate(Rule::Simpson, exp, from, to, n)?;
        info!(n, trapeze = trapeze.value, simpson = simpson.value, "integrated e^x");

        writeln!(out, "Integration from {from} to {to} with {n} intervals:")?;
        writeln!(out, "\tTrapeze: {:.p$}", trapeze.value)?;
        writeln!(out, "\tSimpson: {:.p$}", simpson.value)?;
    }

    for (rule, label) in [(Rule::Trapezoidal, "trapezoidal rule"), (Rule::Simpson, "Simpson's rule")] {
        for &n in intervals {
            let order = error_order(rule, exp, exact, from, to, n)?;
            writeln!(out, "Power of the {label} error with {n} intervals:\n\t{order:.p$}")?;
        }
    }

    Ok(())
}
