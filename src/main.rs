mod cli;
mod commands;

use std::io::{self, Write};

use clap::Parser;
use tracing::Level;

use crate::cli::{Command, NumlabCli};
use crate::commands::sqrt::SqrtArgs;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = NumlabCli::parse();
    init_logging(args.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.cmd {
        Command::Cubic { coefficients } => {
            commands::cubic::run(&coefficients, &mut input, &mut out)?;
        }
        Command::Integrate { from, to, intervals } => {
            commands::integrate::run(from, to, &intervals, &mut out)?;
        }
        Command::Sqrt { value, start, eps, max_steps } => {
            let args = SqrtArgs {
                value: value.as_deref(),
                start: start.as_deref(),
                eps,
                max_steps,
            };
            commands::sqrt::run(args, &mut input, &mut out)?;
        }
        Command::Tridiagonal { intervals, left, right, table } => {
            commands::tridiagonal::run(intervals, left, right, table, &mut out)?;
        }
        Command::Advection { nodes, courant, speed } => {
            commands::advection::run(&nodes, &courant, &speed, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
