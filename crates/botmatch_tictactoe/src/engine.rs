//! Turn alternation as a pure state-transition function.
//!
//! The [`Engine`] owns the game, the random source and a [`Renderer`].
//! Each call to [`Engine::step`] consumes one wake-up and reports what
//! happened. Whoever drives the engine decides when timers fire, so the
//! whole loop can be exercised from a plain list of events.

use crate::action::MoveRejected;
use crate::coord::Coordinate;
use crate::game::Game;
use crate::player::Role;
use crate::status::Status;
use crate::symbol::Symbol;
use crate::view::BoardView;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Presentation capability the engine writes to.
///
/// The engine never reads anything back from the renderer.
pub trait Renderer {
    /// Shows which symbol each side plays. Called on start and reset.
    fn render_players(&mut self, automated: Symbol, human: Symbol);

    /// Redraws every cell.
    fn render_board(&mut self, board: &BoardView);

    /// Shows the final status of a finished game.
    fn render_result(&mut self, status: Status);

    /// Removes any previously shown result.
    fn clear_result(&mut self);
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render_players(&mut self, automated: Symbol, human: Symbol) {
        (**self).render_players(automated, human)
    }

    fn render_board(&mut self, board: &BoardView) {
        (**self).render_board(board)
    }

    fn render_result(&mut self, status: Status) {
        (**self).render_result(status)
    }

    fn clear_result(&mut self) {
        (**self).clear_result()
    }
}

/// Something that woke the loop up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// Start a new game immediately.
    Reset,
    /// The human picked a cell.
    HumanMove(Coordinate),
    /// The bot's thinking delay elapsed.
    TimerElapsed,
}

/// What a single [`Engine::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A fresh game was dealt.
    Reset,
    /// A move was applied.
    Moved {
        /// Who moved.
        role: Role,
        /// Cell claimed.
        coordinate: Coordinate,
        /// Status after the move.
        status: Status,
    },
    /// The wake-up was dropped and nothing changed.
    Ignored(MoveRejected),
}

/// Drives one game session: applies wake-ups and notifies the renderer.
#[derive(Debug)]
pub struct Engine<V, R> {
    game: Game,
    renderer: V,
    rng: R,
}

impl<V: Renderer, R: Rng> Engine<V, R> {
    /// Deals a first game with a random starter.
    pub fn new(renderer: V, mut rng: R) -> Self {
        let game = Game::new(&mut rng);
        Self {
            game,
            renderer,
            rng,
        }
    }

    /// Wraps an existing game.
    pub fn with_game(game: Game, renderer: V, rng: R) -> Self {
        Self {
            game,
            renderer,
            rng,
        }
    }

    /// Draws the initial screen.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        info!(starter = %self.game.starter(), "Session started");
        self.render_players();
        self.redraw();
    }

    /// Applies one wake-up.
    #[instrument(skip(self))]
    pub fn step(&mut self, wake: Wake) -> Step {
        let applied = match wake {
            Wake::Reset => {
                self.game.reset(&mut self.rng);
                info!(starter = %self.game.starter(), "Game reset");
                self.render_players();
                self.redraw();
                return Step::Reset;
            }
            Wake::HumanMove(coord) => self
                .game
                .apply_human_move(coord)
                .map(|c| (Role::Human, c)),
            Wake::TimerElapsed => self
                .game
                .apply_automated_move(&mut self.rng)
                .map(|c| (Role::Automated, c)),
        };

        match applied {
            Ok((role, coordinate)) => {
                self.redraw();
                let status = self.game.status();
                if status.is_terminal() {
                    info!(%status, winner = ?status.winner(), "Game over");
                    self.renderer.render_result(status);
                }
                Step::Moved {
                    role,
                    coordinate,
                    status,
                }
            }
            Err(reason) => {
                debug!(%reason, "Wake-up ignored");
                Step::Ignored(reason)
            }
        }
    }

    /// Applies every wake-up in order.
    pub fn run<I>(&mut self, wakes: I) -> Vec<Step>
    where
        I: IntoIterator<Item = Wake>,
    {
        wakes.into_iter().map(|wake| self.step(wake)).collect()
    }

    /// True when the next thing to happen is the bot's timed move.
    pub fn awaits_timer(&self) -> bool {
        !self.game.is_ended() && self.game.turn() == Role::Automated
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The renderer.
    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    fn render_players(&mut self) {
        let players = self.game.players();
        self.renderer
            .render_players(players.automated().symbol(), players.human().symbol());
    }

    fn redraw(&mut self) {
        self.renderer.clear_result();
        self.renderer.render_board(&self.game.board());
    }
}
