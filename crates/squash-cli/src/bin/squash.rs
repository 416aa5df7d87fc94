#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

use squash_cli::args::CliArgs;
use squash_cli::{driver, tracing_config};

fn main() -> Result<ExitCode> {
    // Zero cost unless SQUASH_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let results = driver::run(&args);

    let mut stdout = std::io::stdout().lock();
    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(output) => {
                writeln!(stdout, "{}", output.text).context("failed to write output")?;
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                failures += 1;
            }
        }
    }
    stdout.flush().context("failed to flush output")?;

    if failures > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
