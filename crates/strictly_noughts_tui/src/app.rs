//! Application state and logic.

use crate::config::{ConfigError, Settings};
use crate::input::{self, Command};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use strictly_noughts::{Difficulty, DisplayState, GameMode, GameSession, HUMAN, Phase, Position};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the app.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    difficulty: Difficulty,
    thinking_delay: Duration,
    reply_due: Option<Instant>,
    notice: Option<String>,
}

impl App {
    /// Creates the app from validated settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let mode = settings.game_mode()?;
        let difficulty = settings.difficulty_level()?;
        let thinking_delay = settings.thinking_delay();

        let session = match settings.seed() {
            Some(seed) => GameSession::with_seed(mode, *seed),
            None => GameSession::new(mode),
        }
        .with_deferred_reply(!thinking_delay.is_zero());

        info!(?mode, ?thinking_delay, "App ready");
        Ok(Self {
            session,
            cursor: Position::Center,
            difficulty,
            thinking_delay,
            reply_due: None,
            notice: Some(opening_notice(mode)),
        })
    }

    /// Snapshot of the game for rendering.
    pub fn state(&self) -> DisplayState {
        self.session.display_state()
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// When the pending computer reply is due, if one is pending.
    pub fn reply_due(&self) -> Option<Instant> {
        self.reply_due
    }

    /// Title line naming the mode.
    pub fn title(&self) -> String {
        self.session.mode().name()
    }

    /// Status line: the last notice, or whose turn it is.
    pub fn status(&self) -> String {
        self.notice
            .clone()
            .unwrap_or_else(|| self.state().status_message())
    }

    /// Handles a key press received at `now`.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Flow {
        let Some(command) = input::command_for(key) else {
            return Flow::Continue;
        };
        debug!(?command, "Key command");

        match command {
            Command::Place(position) => {
                self.cursor = position;
                self.play(position, now);
            }
            Command::PlaceAtCursor => self.play(self.cursor, now),
            Command::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Command::TwoPlayer => self.select_mode(GameMode::HumanVsHuman),
            Command::Computer => self.select_mode(GameMode::HumanVsAutomation(self.difficulty)),
            Command::Difficulty(difficulty) => {
                self.difficulty = difficulty;
                self.select_mode(GameMode::HumanVsAutomation(difficulty));
            }
            Command::Restart => {
                self.session.reset();
                self.reply_due = None;
                self.notice = None;
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Applies the computer's reply once its thinking delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.reply_due else {
            return;
        };
        if now < due {
            return;
        }
        self.reply_due = None;
        if let Err(e) = self.session.resolve_pending_reply() {
            self.notice = Some(e.to_string());
        }
    }

    fn play(&mut self, position: Position, now: Instant) {
        match self.session.apply_human_move(position.to_index()) {
            Ok(state) => {
                self.notice = None;
                if *state.phase() == Phase::AutomationPending {
                    self.reply_due = Some(now + self.thinking_delay);
                }
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn select_mode(&mut self, mode: GameMode) {
        self.session.select_mode(mode);
        self.reply_due = None;
        self.notice = Some(opening_notice(mode));
    }
}

fn opening_notice(mode: GameMode) -> String {
    format!("{}: Player {}'s turn", mode.name(), HUMAN)
}
