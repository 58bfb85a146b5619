//! Move rejection reasons.

use crate::coord::Coordinate;
use crate::player::Role;

/// Why a move left the game untouched.
///
/// Rejected moves are no-ops: stale or racing input is dropped rather
/// than surfaced to the player. The reason exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The game already has a result.
    #[display("game is already over")]
    GameOver,

    /// The other player is due to move.
    #[display("it is not the {} player's turn", _0)]
    NotYourTurn(Role),

    /// The cell is already claimed.
    #[display("cell {} is already claimed", _0)]
    CellTaken(Coordinate),
}

impl std::error::Error for MoveRejected {}
