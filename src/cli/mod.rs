//! Command-line interface for i18n-sync
//!
//! Provides `diff` and `merge` subcommands over a source translation file and a
//! set of target language files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod diff;
mod merge;
mod utils;

/// Find and fill missing keys across JSON translation files
#[derive(Parser)]
#[command(name = "i18n-sync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report top-level keys missing between the source and each target
    Diff(diff::DiffArgs),

    /// Add missing source keys to each target, keeping existing translations
    Merge(merge::MergeArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Diff(args) => diff::run(args),
        Commands::Merge(args) => merge::run(args),
    }
}
