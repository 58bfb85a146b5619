//! Application state mirrored from the game loop's view updates.

use botmatch::{BoardView, Coordinate, Status, ViewUpdate};
use crossterm::event::KeyCode;
use tracing::debug;

use super::input;

/// Main application state.
pub struct App {
    board: BoardView,
    players: Option<String>,
    result: Option<Status>,
    cursor: Coordinate,
    started: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            board: BoardView::blank(),
            players: None,
            result: None,
            cursor: Coordinate::ALL[4],
            started: false,
        }
    }

    /// Latest board received from the loop.
    pub fn board(&self) -> &BoardView {
        &self.board
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// "bot(X) vs you(O)" once symbols are known.
    pub fn players(&self) -> &str {
        self.players.as_deref().unwrap_or("")
    }

    /// Line shown under the board.
    pub fn status_message(&self) -> String {
        if let Some(result) = self.result {
            format!("{}! Press 'r' to play again or 'q' to quit.", result)
        } else if !self.started {
            "Waiting for game to start...".to_string()
        } else if self.board.open_cells().next().is_some() {
            format!(
                "Your move ({}): arrows + Enter, or 1-9.",
                self.cursor.label()
            )
        } else {
            "Bot is thinking...".to_string()
        }
    }

    /// Applies an update from the game loop.
    pub fn handle_update(&mut self, update: ViewUpdate) {
        debug!(?update, "Handling view update");

        match update {
            ViewUpdate::Players { automated, human } => {
                self.players = Some(format!("bot({}) vs you({})", automated, human));
            }
            ViewUpdate::Board(board) => {
                self.board = board;
                self.started = true;
            }
            ViewUpdate::Result(status) => self.result = Some(status),
            ViewUpdate::ClearResult => self.result = None,
        }
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// The cursor cell, if it currently accepts input.
    pub fn selected_move(&self) -> Option<Coordinate> {
        self.open(self.cursor)
    }

    /// The cell for digit key `c`, if it currently accepts input.
    pub fn digit_move(&self, c: char) -> Option<Coordinate> {
        input::digit_to_coordinate(c).and_then(|coord| self.open(coord))
    }

    fn open(&self, coord: Coordinate) -> Option<Coordinate> {
        self.board.cell(coord).accepts_input.then_some(coord)
    }
}
