//! Terminal setup and the event loop.

use crate::app::{App, Flow};
use crate::config::Settings;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_PAUSE: Duration = Duration::from_millis(10);

/// Runs the game in the terminal until the player quits.
#[instrument(skip(settings))]
pub async fn run_tui(settings: &Settings) -> Result<()> {
    let app = App::new(settings).context("Invalid game settings")?;

    info!("Starting Strictly Noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && app.handle_key(key.code, Instant::now()) == Flow::Quit
                {
                    info!("User quit");
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
        sleep(FRAME_PAUSE).await;
    }
}
