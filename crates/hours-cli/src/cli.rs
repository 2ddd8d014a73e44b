//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Work-hours log reporter.
///
/// Prints an annotated transcript of the sessions recorded in a plain-text
/// log, or a cumulative total across all days, and remembers which part of
/// the log has already been reported.
#[derive(Debug, Parser)]
#[command(name = "hours", version, about, long_about = None)]
pub struct Cli {
    /// Log file to report on. Falls back to `log_path` from the config file.
    pub file: Option<PathBuf>,

    /// Print the cumulative total across all days instead of a transcript.
    ///
    /// Summaries cover the whole file, ignoring any checkpoint, and never
    /// modify it.
    #[arg(short, long)]
    pub summarize: bool,

    /// Emit the summary as JSON.
    #[arg(long, requires = "summarize")]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
