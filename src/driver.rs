//! Async game loop: serializes input events into engine wake-ups.
//!
//! Reset requests beat pending moves, pending moves beat the bot timer.
//! The timer is armed once when the bot's turn begins and survives input
//! the game ignores, so a stale human move cannot postpone the bot. Only a
//! reset or an applied move discards it.

use botmatch_tictactoe::{Coordinate, Engine, Renderer, Step, Wake};
use rand::Rng;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Pause observed before the bot moves.
#[async_trait::async_trait]
pub trait Delay: Send + Sync + 'static {
    /// Completes when the bot may move.
    async fn wait(&self);
}

/// Wall-clock delay backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    duration: Duration,
}

impl TokioDelay {
    /// Creates a delay of `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait::async_trait]
impl Delay for TokioDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Delay that completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait::async_trait]
impl Delay for NoDelay {
    async fn wait(&self) {}
}

type Timer = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Sending side of the input channels, held by the presentation layer.
#[derive(Debug, Clone)]
pub struct InputHandle {
    reset_tx: mpsc::UnboundedSender<()>,
    move_tx: mpsc::UnboundedSender<Coordinate>,
}

impl InputHandle {
    /// Submits a human move. Returns false if the loop has stopped.
    pub fn submit_move(&self, coord: Coordinate) -> bool {
        self.move_tx.send(coord).is_ok()
    }

    /// Requests a new game. Returns false if the loop has stopped.
    pub fn request_reset(&self) -> bool {
        self.reset_tx.send(()).is_ok()
    }
}

/// Receiving side of the input channels, consumed by [`Driver`].
#[derive(Debug)]
pub struct Inputs {
    reset_rx: mpsc::UnboundedReceiver<()>,
    move_rx: mpsc::UnboundedReceiver<Coordinate>,
}

/// Creates the input channel pair.
pub fn input_channel() -> (InputHandle, Inputs) {
    let (reset_tx, reset_rx) = mpsc::unbounded_channel();
    let (move_tx, move_rx) = mpsc::unbounded_channel();
    (
        InputHandle { reset_tx, move_tx },
        Inputs { reset_rx, move_rx },
    )
}

/// The single consumer of input events.
pub struct Driver<V, R, D> {
    engine: Engine<V, R>,
    inputs: Inputs,
    delay: Arc<D>,
}

impl<V, R, D> Driver<V, R, D>
where
    V: Renderer + Send,
    R: Rng + Send,
    D: Delay,
{
    /// Creates a driver.
    pub fn new(engine: Engine<V, R>, inputs: Inputs, delay: D) -> Self {
        Self {
            engine,
            inputs,
            delay: Arc::new(delay),
        }
    }

    fn arm_timer(&self) -> Timer {
        let delay = Arc::clone(&self.delay);
        Box::pin(async move { delay.wait().await })
    }

    /// Runs until every [`InputHandle`] is dropped and the queued input
    /// is drained, then returns the engine.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Engine<V, R> {
        info!("Starting game loop");
        self.engine.start();

        let mut resets_open = true;
        let mut moves_open = true;
        let mut timer: Option<Timer> = None;

        loop {
            if self.engine.awaits_timer() && (resets_open || moves_open) {
                if timer.is_none() {
                    debug!("Arming bot delay");
                    timer = Some(self.arm_timer());
                }
            } else {
                timer = None;
            }

            let timer_live = timer.is_some();
            let wake = tokio::select! {
                biased;
                reset = self.inputs.reset_rx.recv(), if resets_open => match reset {
                    Some(()) => Wake::Reset,
                    None => {
                        resets_open = false;
                        continue;
                    }
                },
                coord = self.inputs.move_rx.recv(), if moves_open => match coord {
                    Some(coord) => Wake::HumanMove(coord),
                    None => {
                        moves_open = false;
                        continue;
                    }
                },
                () = async {
                    if let Some(pending) = timer.as_mut() {
                        pending.await;
                    }
                }, if timer_live => Wake::TimerElapsed,
                else => break,
            };

            let step = self.engine.step(wake);
            debug!(?wake, ?step, "Loop step");

            // A finished timer must not be polled again.
            if wake == Wake::TimerElapsed || !matches!(step, Step::Ignored(_)) {
                timer = None;
            }
        }

        info!("Input closed, game loop stopped");
        self.engine
    }
}
