//! Renderer that forwards every update over a channel to the UI task.

use botmatch_tictactoe::{BoardView, Renderer, Status, Symbol};
use tokio::sync::mpsc;
use tracing::debug;

/// Messages sent from the game loop to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Symbols for each side, sent on start and reset.
    Players {
        /// Bot's symbol.
        automated: Symbol,
        /// Human's symbol.
        human: Symbol,
    },
    /// Fresh board contents.
    Board(BoardView),
    /// Final status of a finished game.
    Result(Status),
    /// Hide the previous result.
    ClearResult,
}

/// [`Renderer`] writing [`ViewUpdate`]s into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    tx: mpsc::UnboundedSender<ViewUpdate>,
}

/// Creates a connected renderer and receiver.
pub fn view_channel() -> (ChannelRenderer, mpsc::UnboundedReceiver<ViewUpdate>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelRenderer { tx }, rx)
}

impl ChannelRenderer {
    fn send(&self, update: ViewUpdate) {
        // The UI may already be gone while the loop drains.
        if self.tx.send(update).is_err() {
            debug!("View receiver dropped");
        }
    }
}

impl Renderer for ChannelRenderer {
    fn render_players(&mut self, automated: Symbol, human: Symbol) {
        self.send(ViewUpdate::Players { automated, human });
    }

    fn render_board(&mut self, board: &BoardView) {
        self.send(ViewUpdate::Board(*board));
    }

    fn render_result(&mut self, status: Status) {
        self.send(ViewUpdate::Result(status));
    }

    fn clear_result(&mut self) {
        self.send(ViewUpdate::ClearResult);
    }
}
