//! Participants and the cells they have claimed.

use crate::coord::Coordinate;
use crate::symbol::Symbol;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// The bot, picking uniformly random empty cells.
    Automated,
    /// The person at the keyboard.
    Human,
}

impl Role {
    /// Returns the opposing role.
    pub fn other(self) -> Self {
        match self {
            Role::Automated => Role::Human,
            Role::Human => Role::Automated,
        }
    }

    /// Short name shown next to the player's symbol.
    pub fn label(self) -> &'static str {
        match self {
            Role::Automated => "bot",
            Role::Human => "you",
        }
    }
}

/// One participant: a role, a symbol and the set of claimed cells.
///
/// A player never checks ownership itself; [`crate::Game`] guarantees
/// that a cell is claimed at most once across both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    role: Role,
    symbol: Symbol,
    claimed: BTreeSet<Coordinate>,
}

impl Player {
    /// Creates a player with no claimed cells.
    pub fn new(role: Role, symbol: Symbol) -> Self {
        Self {
            role,
            symbol,
            claimed: BTreeSet::new(),
        }
    }

    /// Returns the player's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the player's symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the claimed cells.
    pub fn claimed(&self) -> &BTreeSet<Coordinate> {
        &self.claimed
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    /// True if `coord` has been claimed by this player.
    pub fn owns(&self, coord: Coordinate) -> bool {
        self.claimed.contains(&coord)
    }

    /// True iff every coordinate in `coords` is claimed. Vacuously true
    /// for an empty slice.
    pub fn contains_all(&self, coords: &[Coordinate]) -> bool {
        coords.iter().all(|c| self.claimed.contains(c))
    }

    /// Adds `coord` to the claimed set.
    pub(crate) fn claim(&mut self, coord: Coordinate) {
        self.claimed.insert(coord);
    }
}

/// The ordered pair of players, addressed by role rather than index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    automated: Player,
    human: Player,
}

impl Players {
    /// Creates both players for a game started by `starter`, who plays X.
    pub fn new(starter: Role) -> Self {
        let symbol_for = |role: Role| {
            if role == starter {
                Symbol::X
            } else {
                Symbol::X.opponent()
            }
        };
        Self {
            automated: Player::new(Role::Automated, symbol_for(Role::Automated)),
            human: Player::new(Role::Human, symbol_for(Role::Human)),
        }
    }

    /// The bot.
    pub fn automated(&self) -> &Player {
        &self.automated
    }

    /// The human.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// Player holding `role`.
    pub fn get(&self, role: Role) -> &Player {
        match role {
            Role::Automated => &self.automated,
            Role::Human => &self.human,
        }
    }

    pub(crate) fn get_mut(&mut self, role: Role) -> &mut Player {
        match role {
            Role::Automated => &mut self.automated,
            Role::Human => &mut self.human,
        }
    }

    /// Both players, automated first.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        Role::iter().map(|role| self.get(role))
    }

    /// Role playing `symbol`.
    pub fn role_of(&self, symbol: Symbol) -> Role {
        if self.automated.symbol == symbol {
            Role::Automated
        } else {
            Role::Human
        }
    }

    /// Symbol drawn in `coord`, if anyone has claimed it.
    pub fn owner_of(&self, coord: Coordinate) -> Option<Symbol> {
        self.iter().find(|p| p.owns(coord)).map(Player::symbol)
    }

    /// Total number of claimed cells across both players.
    pub fn total_claimed(&self) -> usize {
        self.automated.claimed_count() + self.human.claimed_count()
    }
}
