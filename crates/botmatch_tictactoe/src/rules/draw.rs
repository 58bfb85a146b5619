//! Draw detection.

use crate::coord::CELL_COUNT;
use crate::player::Players;

/// True when every cell has been claimed by one of the players.
///
/// A full board with no winner is a draw.
pub fn is_full(players: &Players) -> bool {
    players.total_claimed() == CELL_COUNT
}
