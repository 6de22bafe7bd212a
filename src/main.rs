//! TruncSleuth: finds files whose reported size is nonzero but whose
//! content reads back empty.
//!
//! Thin binary entry point. All scanning logic lives in `truncsleuth-core`.

mod cli;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use truncsleuth_core::{report, Scanner};

fn main() -> ExitCode {
    let args = cli::Args::parse();

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(cli::EXIT_UNREACHABLE)
        }
    }
}

fn run(args: &cli::Args) -> anyhow::Result<ExitCode> {
    let result = Scanner::new(args.scan_options()).scan(&args.root);

    let stdout = std::io::stdout();
    report::render(&result, args.format.into(), stdout.lock())
        .context("failed to write report")?;

    Ok(cli::exit_code(&result))
}
