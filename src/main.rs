//! Botmatch - terminal entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use botmatch::Config;
use clap::Parser;
use cli::Cli;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(ms) = cli.bot_delay_ms {
        config = config.with_bot_delay_ms(ms);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    initialize_tracing(&config)?;
    info!(?config, "Starting botmatch");

    tui::run_tui(config).await
}

/// Sends logs to the configured file so they stay out of the terminal UI.
#[instrument(skip(config))]
fn initialize_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
