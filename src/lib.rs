//! Botmatch - terminal tic-tac-toe against a random bot.
//!
//! # Architecture
//!
//! - **Core**: game rules and turn alternation live in `botmatch_tictactoe`
//! - **Driver**: async loop turning input events into engine wake-ups
//! - **Render**: channel-backed renderer feeding the terminal UI
//! - **Config**: TOML settings with CLI overrides
//!
//! # Example
//!
//! ```no_run
//! use botmatch::{Config, Driver, Engine, TokioDelay, input_channel, view_channel};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! let (renderer, _updates) = view_channel();
//! let (input, inputs) = input_channel();
//! let engine = Engine::new(renderer, config.rng());
//! let driver = Driver::new(engine, inputs, TokioDelay::new(config.bot_delay()));
//! let loop_task = tokio::spawn(driver.run());
//! input.request_reset();
//! drop(input);
//! loop_task.await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod driver;
mod render;

pub use config::{Config, ConfigError};
pub use driver::{Delay, Driver, InputHandle, Inputs, NoDelay, TokioDelay, input_channel};
pub use render::{ChannelRenderer, ViewUpdate, view_channel};

pub use botmatch_tictactoe::{
    BoardView, CellView, Coordinate, Engine, Game, MoveRejected, Player, Players, Renderer, Role,
    Status, Step, Symbol, Wake,
};
