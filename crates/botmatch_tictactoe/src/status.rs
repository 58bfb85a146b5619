//! Derived game status.

use crate::player::Role;

/// Outcome of the game so far, seen from the human's side.
///
/// Never stored: [`crate::Game::status`] recomputes it from the claimed
/// sets every time it is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Status {
    /// Nobody has won and empty cells remain.
    #[strum(to_string = "Game in progress")]
    InProgress,
    /// The bot owns a winning triple.
    #[strum(to_string = "You lost")]
    AutomatedWon,
    /// The human owns a winning triple.
    #[strum(to_string = "You won")]
    HumanWon,
    /// Board full, no winner.
    #[strum(to_string = "Draw")]
    Draw,
}

impl Status {
    /// True for every status except [`Status::InProgress`].
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }

    /// Role that won, if any.
    pub fn winner(self) -> Option<Role> {
        match self {
            Status::AutomatedWon => Some(Role::Automated),
            Status::HumanWon => Some(Role::Human),
            Status::InProgress | Status::Draw => None,
        }
    }

    /// Status reporting a win for `role`.
    pub fn won_by(role: Role) -> Self {
        match role {
            Role::Automated => Status::AutomatedWon,
            Role::Human => Status::HumanWon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::InProgress.to_string(), "Game in progress");
        assert_eq!(Status::HumanWon.to_string(), "You won");
        assert_eq!(Status::AutomatedWon.to_string(), "You lost");
        assert_eq!(Status::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_only_in_progress_is_open() {
        assert!(!Status::InProgress.is_terminal());
        assert!(Status::HumanWon.is_terminal());
        assert!(Status::AutomatedWon.is_terminal());
        assert!(Status::Draw.is_terminal());
    }

    #[test]
    fn test_winner_round_trips_won_by() {
        for role in [Role::Automated, Role::Human] {
            assert_eq!(Status::won_by(role).winner(), Some(role));
        }
        assert_eq!(Status::Draw.winner(), None);
        assert_eq!(Status::InProgress.winner(), None);
    }
}
