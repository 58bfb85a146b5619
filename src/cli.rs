//! Command-line interface for botmatch.

use clap::Parser;

/// Botmatch - tic-tac-toe against a random bot
#[derive(Parser, Debug)]
#[command(name = "botmatch")]
#[command(about = "Play tic-tac-toe in the terminal against a bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "botmatch.toml")]
    pub config: std::path::PathBuf,

    /// Pause before each bot move, in milliseconds
    #[arg(long)]
    pub bot_delay_ms: Option<u64>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}
