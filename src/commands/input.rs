//! Console prompts for values not given on the command line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Prints `prompt` to `out` and returns the next line of `input`, trimmed.
pub fn prompt_line<R, W>(prompt: &str, input: &mut R, out: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("unexpected end of input while waiting for: {prompt}");
    }
    Ok(line.trim().to_string())
}

/// Parses a single number, naming it in the error.
pub fn parse_number(name: &str, token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid input for {name}: `{token}` is not a number"))
}
