use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use numlab::fixed_point::{iterate, FixedPointCfg, FixedPointReport, Scheme};

use super::input::{parse_number, prompt_line};

const PRINT_DIGITS: usize = 9;

pub struct SqrtArgs<'a> {
    pub value:     Option<&'a str>,
    pub start:     Option<&'a str>,
    pub eps:       f64,
    pub max_steps: usize,
}

pub fn run<R, W>(args: SqrtArgs<'_>, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let value = match args.value {
        Some(v) => parse_number("value", v)?,
        None => {
            let line = prompt_line("Enter the value whose square root you want to find:", input, out)?;
            parse_number("value", &line)?
        }
    };
    let start = match args.start {
        Some(v) => parse_number("start", v)?,
        None => {
            let line = prompt_line("Enter the value you want to start iterate from:", input, out)?;
            parse_number("start", &line)?
        }
    };

    let cfg = FixedPointCfg::new()
        .set_eps(args.eps)?
        .set_max_steps(args.max_steps)?;

    let p = PRINT_DIGITS;
    writeln!(out, "sqrt({value}) = {:.p$} -- the right answer.", value.sqrt())?;

    for (scheme, title) in [(Scheme::Reciprocal, "FIRST"), (Scheme::Averaged, "SECOND")] {
        let report = iterate(scheme, value, start, cfg)?;
        info!(%scheme, estimate = report.estimate, steps = report.steps, diverged = report.diverged, "iteration finished");

        writeln!(out, "\n----- {title} METHOD -----\n")?;
        write_report(&report, value, title, out)?;
    }
    Ok(())
}

fn write_report<W: Write>(report: &FixedPointReport, value: f64, title: &str, out: &mut W) -> Result<()> {
    let p = PRINT_DIGITS;
    if report.diverged {
        writeln!(out, "Bad start value or function - method does not converge!")?;
        return Ok(());
    }

    let method = title.to_lowercase();
    for (label, snapshot) in [("x2", report.x2), ("x10", report.x10)] {
        match snapshot {
            Some(x) => writeln!(out, "{label} = {x:.p$}")?,
            None => writeln!(
                out,
                "{label} was not set, because {method} method ended after {} step(s).",
                report.steps
            )?,
        }
    }
    writeln!(out, "After {} step(s), this value was estimated:", report.steps)?;
    writeln!(out, "\tsqrt({value}) ~ {:.p$}", report.estimate)?;
    Ok(())
}
