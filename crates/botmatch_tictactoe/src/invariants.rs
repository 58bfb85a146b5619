//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are checked in debug builds and can be tested independently.

use crate::coord::CELL_COUNT;
use crate::game::Game;
use crate::symbol::Symbol;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// No cell is claimed by both players.
pub struct DisjointClaims;

impl Invariant<Game> for DisjointClaims {
    fn holds(game: &Game) -> bool {
        let players = game.players();
        players
            .automated()
            .claimed()
            .is_disjoint(players.human().claimed())
    }

    fn description() -> &'static str {
        "Claimed sets are disjoint"
    }
}

/// At most 9 cells are claimed in total.
pub struct ClaimBound;

impl Invariant<Game> for ClaimBound {
    fn holds(game: &Game) -> bool {
        game.players().total_claimed() <= CELL_COUNT
    }

    fn description() -> &'static str {
        "At most 9 cells are claimed"
    }
}

/// The turn belongs to X after an even number of moves and to O after
/// an odd number, and X is never behind O.
pub struct TurnConsistency;

impl Invariant<Game> for TurnConsistency {
    fn holds(game: &Game) -> bool {
        let players = game.players();
        let x_count = players.get(players.role_of(Symbol::X)).claimed_count();
        let o_count = players.get(players.role_of(Symbol::O)).claimed_count();

        let expected = if x_count == o_count {
            Symbol::X
        } else if x_count == o_count + 1 {
            Symbol::O
        } else {
            return false;
        };

        game.turn() == players.role_of(expected)
    }

    fn description() -> &'static str {
        "Turns alternate starting with X"
    }
}

/// Every invariant the game maintains.
pub type GameInvariants = (DisjointClaims, ClaimBound, TurnConsistency);
