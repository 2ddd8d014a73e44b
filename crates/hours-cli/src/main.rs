use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hours_cli::commands::{report, summarize};
use hours_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let file = cli
        .file
        .or(config.log_path)
        .context("no log file given: pass FILE or set log_path in the configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.summarize {
        summarize::run(&file, cli.json, &mut out)
    } else {
        let stdin = std::io::stdin();
        report::run(&file, &mut out, &mut stdin.lock())
    }
}
