#![warn(missing_docs)]
//! # gradebook-status binary
//!
//! Reads one status input as JSON and prints the indicators to show.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gradebook_status_app::{
    APP_VERSION, AppConfig, AppError, init_tracing, read_input, render_json, render_plain,
    resolve_from_json,
};
use tracing::error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `[Kind] label` line per indicator
    Text,
    /// JSON array of `{kind, label}` descriptors
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "gradebook-status")]
#[command(about = "Resolve gradebook submission status pills and messages")]
#[command(version = APP_VERSION)]
struct Cli {
    /// Path to a JSON status input (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// CLI entry point.
fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    init_tracing(&config);

    if let Err(err) = run(&cli, &config) {
        error!(%err, "status resolution failed");
        eprintln!("gradebook-status: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    let raw = read_input(cli.input.as_deref())?;
    let indicators = resolve_from_json(&raw, config)?;
    let rendered = match cli.format {
        OutputFormat::Text => render_plain(&indicators),
        OutputFormat::Json => render_json(&indicators)?,
    };
    println!("{rendered}");
    Ok(())
}
