//! Pure tic-tac-toe game logic for a human playing a random bot.
//!
//! # Architecture
//!
//! - **Coordinates**: board positions and the table of winning triples
//! - **Players**: role, symbol and claimed cells for each side
//! - **Rules**: status derived from the two claimed sets
//! - **Game**: the state machine applying moves and picking bot cells
//! - **Engine**: turn alternation driven by explicit wake-ups
//!
//! # Example
//!
//! ```
//! use botmatch_tictactoe::{Coordinate, Game, Role, Status};
//!
//! let mut game = Game::with_starter(Role::Human);
//! game.apply_human_move(Coordinate::new(1, 1).unwrap()).unwrap();
//! assert_eq!(game.turn(), Role::Automated);
//! assert_eq!(game.status(), Status::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coord;
mod engine;
mod game;
pub mod invariants;
mod player;
pub mod rules;
mod status;
mod symbol;
mod view;

pub use action::MoveRejected;
pub use coord::{BOARD_SIZE, CELL_COUNT, Coordinate, WINNING_TRIPLES};
pub use engine::{Engine, Renderer, Step, Wake};
pub use game::Game;
pub use player::{Player, Players, Role};
pub use status::Status;
pub use symbol::Symbol;
pub use view::{BoardView, CellView};
