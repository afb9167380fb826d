//! foldersort — classify a folder's files and write a summary report.
//!
//! Thin binary entry point. All logic lives in the `foldersort-core`
//! and `foldersort-cli` crates.

use clap::Parser;
use foldersort_cli::{AppPhase, Cli};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialise structured logging on stderr so the panels own stdout.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("foldersort starting");

    let stdout = std::io::stdout();
    let phase = foldersort_cli::run(&cli, &mut stdout.lock())?;

    Ok(match phase {
        AppPhase::Failed => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
