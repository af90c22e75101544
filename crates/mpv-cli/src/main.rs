//! # mpv CLI entry point
//!
//! Parses command-line arguments, initializes tracing from the
//! verbosity level, and dispatches to the validate handler.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mpv_cli::validate::{run_validate, ValidateArgs};

/// Metadata package validator.
///
/// Checks a metadata package export against the package-quality rule
/// catalog and reports severity-tagged diagnostics. The exit code is 0
/// when the package passes and 1 when any counted error is found or
/// the file cannot be read.
#[derive(Parser, Debug)]
#[command(name = "mpv", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level. Diagnostics do not
    // flow through tracing; they are printed by the handler.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
