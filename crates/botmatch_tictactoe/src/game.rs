//! The game state machine: two players, a turn flag and move application.

use crate::action::MoveRejected;
use crate::coord::{BOARD_SIZE, Coordinate};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::player::{Player, Players, Role};
use crate::rules;
use crate::status::Status;
use crate::symbol::Symbol;
use crate::view::{BoardView, CellView};
use rand::Rng;
use tracing::{debug, info, instrument};

/// A single game between the bot and the human.
///
/// The game is the sole owner of both players. Status is never stored;
/// [`Game::status`] derives it from the claimed sets on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: Players,
    turn: Role,
}

impl Game {
    /// Creates a game whose starting player is drawn uniformly at random.
    ///
    /// The same draw decides symbols: the starter plays X.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let starter = if rng.random_bool(0.5) {
            Role::Automated
        } else {
            Role::Human
        };
        Self::with_starter(starter)
    }

    /// Creates a game with a fixed starting player.
    #[instrument]
    pub fn with_starter(starter: Role) -> Self {
        info!(%starter, "New game");
        Self {
            players: Players::new(starter),
            turn: starter,
        }
    }

    /// Rebuilds a game by applying `moves` alternately, `starter` first.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, e.g. a repeated cell or a move after
    /// the game ended.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(starter: Role, moves: &[Coordinate]) -> Result<Self, MoveRejected> {
        let mut game = Self::with_starter(starter);
        for &coord in moves {
            game.apply_move(game.turn, coord)?;
        }
        Ok(game)
    }

    /// Starts over in place: new random starter, empty board.
    #[instrument(skip(self, rng))]
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }

    /// Both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Player holding `role`.
    pub fn player(&self, role: Role) -> &Player {
        self.players.get(role)
    }

    /// Role due to move next.
    pub fn turn(&self) -> Role {
        self.turn
    }

    /// Role that moved first (the one playing X).
    pub fn starter(&self) -> Role {
        self.players.role_of(Symbol::X)
    }

    /// Current status, recomputed from the claimed sets.
    pub fn status(&self) -> Status {
        rules::status(&self.players)
    }

    /// True once the game has a result.
    pub fn is_ended(&self) -> bool {
        self.status().is_terminal()
    }

    /// True if either player has claimed `coord`.
    pub fn is_coordinate_used(&self, coord: Coordinate) -> bool {
        self.players.iter().any(|p| p.owns(coord))
    }

    /// Samples cells uniformly until an unclaimed one turns up.
    ///
    /// # Panics
    ///
    /// Panics if the board is full. Callers check [`Game::is_ended`] first,
    /// so reaching this with no free cell is a logic error.
    #[instrument(skip(self, rng))]
    pub fn pick_random_empty_coordinate<R: Rng>(&self, rng: &mut R) -> Coordinate {
        assert!(
            !rules::is_full(&self.players),
            "pick_random_empty_coordinate called on a full board"
        );

        loop {
            let coord = Coordinate::at(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !self.is_coordinate_used(coord) {
                return coord;
            }
        }
    }

    /// Claims `coord` for the human.
    ///
    /// A no-op unless the game is open, the human is due to move and the
    /// cell is free.
    pub fn apply_human_move(&mut self, coord: Coordinate) -> Result<Coordinate, MoveRejected> {
        self.apply_move(Role::Human, coord)
    }

    /// Claims a random free cell for the bot.
    ///
    /// A no-op unless the game is open and the bot is due to move.
    #[instrument(skip(self, rng))]
    pub fn apply_automated_move<R: Rng>(&mut self, rng: &mut R) -> Result<Coordinate, MoveRejected> {
        self.check_turn(Role::Automated)?;
        let coord = self.pick_random_empty_coordinate(rng);
        self.apply_move(Role::Automated, coord)
    }

    #[instrument(skip(self), fields(turn = %self.turn))]
    fn apply_move(&mut self, role: Role, coord: Coordinate) -> Result<Coordinate, MoveRejected> {
        self.check_turn(role)?;
        if self.is_coordinate_used(coord) {
            return Err(MoveRejected::CellTaken(coord));
        }

        self.players.get_mut(role).claim(coord);
        self.turn = self.turn.other();
        debug!(%role, %coord, status = %self.status(), "Move applied");

        debug_assert!(
            <GameInvariants as InvariantSet<Game>>::check_all(self).is_ok(),
            "game invariants violated after {role} claimed {coord}"
        );

        Ok(coord)
    }

    fn check_turn(&self, role: Role) -> Result<(), MoveRejected> {
        if self.is_ended() {
            return Err(MoveRejected::GameOver);
        }
        if self.turn != role {
            return Err(MoveRejected::NotYourTurn(role));
        }
        Ok(())
    }

    /// Snapshot of every cell for the presentation layer.
    pub fn board(&self) -> BoardView {
        let open = !self.is_ended() && self.turn == Role::Human;
        BoardView::new(Coordinate::ALL.map(|coordinate| {
            let owner = self.players.owner_of(coordinate);
            CellView {
                coordinate,
                owner,
                accepts_input: open && owner.is_none(),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fresh_game_in_progress() {
        let game = Game::new(&mut StdRng::seed_from_u64(7));
        assert_eq!(game.status(), Status::InProgress);
        assert!(!game.is_ended());
        assert_eq!(game.players().total_claimed(), 0);
        assert_eq!(game.turn(), game.starter());
    }

    #[test]
    fn test_both_starters_occur() {
        let mut rng = StdRng::seed_from_u64(1);
        let starters: Vec<_> = (0..64).map(|_| Game::new(&mut rng).starter()).collect();
        assert!(starters.contains(&Role::Automated));
        assert!(starters.contains(&Role::Human));
    }

    #[test]
    fn test_starter_gets_x() {
        let game = Game::with_starter(Role::Automated);
        assert_eq!(game.player(Role::Automated).symbol(), Symbol::X);
        assert_eq!(game.player(Role::Human).symbol(), Symbol::O);
    }

    #[test]
    fn test_human_move_flips_turn() {
        let mut game = Game::with_starter(Role::Human);
        let coord = Coordinate::at(1, 1);
        assert_eq!(game.apply_human_move(coord), Ok(coord));
        assert_eq!(game.turn(), Role::Automated);
        assert!(game.is_coordinate_used(coord));
    }

    #[test]
    fn test_human_move_out_of_turn_is_noop() {
        let mut game = Game::with_starter(Role::Automated);
        let before = game.clone();
        assert_eq!(
            game.apply_human_move(Coordinate::at(0, 0)),
            Err(MoveRejected::NotYourTurn(Role::Human))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_automated_move_out_of_turn_is_noop() {
        let mut game = Game::with_starter(Role::Human);
        let before = game.clone();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            game.apply_automated_move(&mut rng),
            Err(MoveRejected::NotYourTurn(Role::Automated))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_claimed_cell_is_noop() {
        let mut game = Game::with_starter(Role::Automated);
        let mut rng = StdRng::seed_from_u64(11);
        let taken = game.apply_automated_move(&mut rng).unwrap();
        let before = game.clone();

        assert_eq!(
            game.apply_human_move(taken),
            Err(MoveRejected::CellTaken(taken))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_pick_avoids_used_cells() {
        // Leave only the bottom-right cell free.
        let moves = [
            Coordinate::at(0, 0),
            Coordinate::at(0, 1),
            Coordinate::at(0, 2),
            Coordinate::at(1, 1),
            Coordinate::at(1, 0),
            Coordinate::at(1, 2),
            Coordinate::at(2, 1),
            Coordinate::at(2, 0),
        ];
        let game = Game::replay(Role::Human, &moves).unwrap();
        assert_eq!(game.status(), Status::InProgress);

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(
                game.pick_random_empty_coordinate(&mut rng),
                Coordinate::at(2, 2)
            );
        }
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_pick_on_full_board_panics() {
        let moves = [
            Coordinate::at(0, 0),
            Coordinate::at(0, 1),
            Coordinate::at(0, 2),
            Coordinate::at(1, 1),
            Coordinate::at(1, 0),
            Coordinate::at(1, 2),
            Coordinate::at(2, 1),
            Coordinate::at(2, 0),
            Coordinate::at(2, 2),
        ];
        let game = Game::replay(Role::Human, &moves).unwrap();
        assert_eq!(game.status(), Status::Draw);
        game.pick_random_empty_coordinate(&mut StdRng::seed_from_u64(0));
    }

    #[test]
    fn test_board_view_input_flags() {
        let mut game = Game::with_starter(Role::Human);
        assert_eq!(game.board().open_cells().count(), 9);

        game.apply_human_move(Coordinate::at(0, 0)).unwrap();
        let board = game.board();
        assert_eq!(board.cell(Coordinate::at(0, 0)).owner, Some(Symbol::X));
        assert_eq!(board.open_cells().count(), 0, "bot's turn, nothing accepts input");

        game.apply_automated_move(&mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(game.board().open_cells().count(), 7);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = Game::with_starter(Role::Human);
        game.apply_human_move(Coordinate::at(2, 2)).unwrap();

        game.reset(&mut rng);
        assert_eq!(game.players().total_claimed(), 0);
        assert_eq!(game.turn(), game.starter());
        assert_eq!(game.status(), Status::InProgress);
    }
}
