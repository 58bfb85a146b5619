//! Terminal UI: the presentation adapter around the game loop.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use botmatch::{Config, Driver, Engine, InputHandle, TokioDelay, ViewUpdate, input_channel, view_channel};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use app::App;

/// Runs the terminal UI until the player quits.
#[instrument(skip_all)]
pub async fn run_tui(config: Config) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (renderer, mut updates) = view_channel();
    let (handle, inputs) = input_channel();

    let engine = Engine::new(renderer, config.rng());
    let driver = Driver::new(engine, inputs, TokioDelay::new(config.bot_delay()));
    let loop_handle = tokio::spawn(driver.run());

    let res = run_app(&mut terminal, App::new(), &handle, &mut updates).await;

    // Closing the inputs stops the loop.
    drop(handle);
    if let Err(e) = loop_handle.await {
        error!(error = %e, "Game loop task failed");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    handle: &InputHandle,
    updates: &mut mpsc::UnboundedReceiver<ViewUpdate>,
) -> Result<()> {
    loop {
        while let Ok(update) = updates.try_recv() {
            app.handle_update(update);
        }

        terminal
            .draw(|f| ui::draw(f, &app))
            .context("Failed to draw frame")?;

        if !event::poll(Duration::from_millis(50))? {
            // Let the game loop task make progress between polls.
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Ok(());
            }
            KeyCode::Char('r') => {
                debug!("Reset requested");
                handle.request_reset();
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                app.move_cursor(key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(coord) = app.selected_move() {
                    debug!(%coord, "Submitting move");
                    handle.submit_move(coord);
                }
            }
            KeyCode::Char(c) => {
                if let Some(coord) = app.digit_move(c) {
                    debug!(%coord, "Submitting move");
                    handle.submit_move(coord);
                }
            }
            _ => {}
        }
    }
}
