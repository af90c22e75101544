//! # Validate Handler
//!
//! Loads the package file, runs one validation pass, reports the
//! diagnostics, and maps the error count to an exit status.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mpv_core::normalize;

/// Arguments for the validation run.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the metadata package JSON export.
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Mirror every diagnostic line into this file as well as stdout.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Execute one validation run.
///
/// Returns the process exit status: 0 when the counted error total is
/// zero, 1 otherwise. Load, parse, and shape failures bubble up as
/// errors and are mapped to exit status 1 by `main`.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read metadata package: {}", args.file.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", args.file.display()))?;
    let mut package = normalize(raw)
        .with_context(|| format!("malformed metadata package: {}", args.file.display()))?;

    tracing::info!(file = %args.file.display(), "starting validation");

    let sink = mpv_rules::validate(&mut package);

    let mut log_file = match &args.log_file {
        Some(path) => Some(
            fs::File::create(path)
                .with_context(|| format!("cannot create log file: {}", path.display()))?,
        ),
        None => None,
    };

    for diagnostic in sink.diagnostics() {
        println!("{diagnostic}");
        if let Some(log) = log_file.as_mut() {
            writeln!(log, "{diagnostic}").context("cannot write to log file")?;
        }
    }

    let errors = sink.error_count();
    tracing::info!(
        errors,
        diagnostics = sink.diagnostics().len(),
        "finished validation"
    );

    Ok(if errors > 0 { 1 } else { 0 })
}
