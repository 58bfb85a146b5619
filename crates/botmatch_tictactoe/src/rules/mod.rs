//! Game rules for tic-tac-toe.
//!
//! Pure functions over the two claimed sets. Rules are kept apart from
//! the state machine so they can be tested against arbitrary positions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::player::Players;
use crate::status::Status;
use tracing::instrument;

/// Computes the status of a position.
#[instrument(skip(players), fields(claimed = players.total_claimed()))]
pub fn status(players: &Players) -> Status {
    if let Some(role) = check_winner(players) {
        Status::won_by(role)
    } else if is_full(players) {
        Status::Draw
    } else {
        Status::InProgress
    }
}
