//! pivotgen
//!
//! Pivot-table migration generator.
//!
//! This is the command-line entry point: it parses arguments, initialises
//! logging, runs the requested generator, and reports the outcome.

use std::io;
use std::process::ExitCode;

use colored::Colorize;
use pivotgen_cli::{Cli, Parser, commands, output, ux};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    ux::setup_logging(cli.verbose, cli.quiet, cli.json)?;

    let result = commands::run(&cli);

    let report = output::write_report(
        &cli.command.to_string(),
        cli.json,
        &result,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    if let Err(e) = &report {
        eprintln!("{} failed to write report: {e:#}", "error:".red().bold());
    }

    Ok(ExitCode::from(output::final_exit_code(&report, &result)))
}
