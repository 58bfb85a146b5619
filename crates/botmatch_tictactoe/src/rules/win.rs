//! Win detection.

use crate::coord::WINNING_TRIPLES;
use crate::player::{Players, Role};
use strum::IntoEnumIterator;
use tracing::warn;

/// Returns the role owning a full winning triple, if any.
///
/// Both players are checked against every triple. With disjoint claimed
/// sets built by alternating moves at most one of them can own a triple;
/// if a hand-built position gives both a line, the first triple in table
/// order decides and the conflict is logged.
pub fn check_winner(players: &Players) -> Option<Role> {
    let mut winner = None;

    for triple in &WINNING_TRIPLES {
        for role in Role::iter() {
            if !players.get(role).contains_all(triple) {
                continue;
            }
            match winner {
                None => winner = Some(role),
                Some(first) if first != role => {
                    warn!(%first, other = %role, "both players own a winning triple");
                }
                Some(_) => {}
            }
        }
    }

    winner
}
