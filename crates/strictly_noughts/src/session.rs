//! Game session: turn sequencing, mode selection and the computer's reply.
//!
//! A [`GameSession`] owns its board outright. Callers report human moves and
//! read back a [`DisplayState`]; the session validates, applies, checks for a
//! result and, in computer mode, has the active policy answer for O.
//!
//! The computer's reply either happens inside [`GameSession::apply_human_move`]
//! or, with a deferred reply, is left in [`Phase::AutomationPending`] until the
//! front-end calls [`GameSession::resolve_pending_reply`]. While pending the
//! session is busy and rejects human moves.

use crate::error::{GameError, IllegalMove};
use crate::{Board, Cell, GameMode, Outcome, Player};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// The player seated first. In computer mode this is always the human.
pub const HUMAN: Player = Player::X;

/// The player the computer controls in computer mode.
pub const AUTOMATION: Player = Player::O;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Waiting for `current_turn` to move.
    AwaitingMove,
    /// The computer's reply has been deferred and not applied yet.
    AutomationPending,
    /// The game is over.
    Ended(Outcome),
}

/// One game of noughts and crosses, from first move to result.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_turn: Player,
    phase: Phase,
    mode: GameMode,
    deferred_reply: bool,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session seeded from the operating system.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_os_rng())
    }

    /// Creates a session whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    /// Creates a session using the given random source.
    #[instrument(skip(rng))]
    pub fn with_rng(mode: GameMode, rng: StdRng) -> Self {
        info!(?mode, "Creating game session");
        Self {
            board: Board::new(),
            current_turn: HUMAN,
            phase: Phase::AwaitingMove,
            mode,
            deferred_reply: false,
            rng,
        }
    }

    /// Defers the computer's reply until [`Self::resolve_pending_reply`].
    pub fn with_deferred_reply(mut self, deferred: bool) -> Self {
        self.deferred_reply = deferred;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the computer while its reply is pending).
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Whether computer replies are deferred.
    pub fn deferred_reply(&self) -> bool {
        self.deferred_reply
    }

    /// The result, once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            Phase::AwaitingMove | Phase::AutomationPending => None,
        }
    }

    /// True until the game ends.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Ended(_))
    }

    /// True while a deferred computer reply is outstanding.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::AutomationPending
    }

    /// Switches mode and starts a fresh game. The computer never opens.
    #[instrument(skip(self), fields(previous = ?self.mode))]
    pub fn select_mode(&mut self, mode: GameMode) -> DisplayState {
        info!(?mode, "Mode selected");
        self.mode = mode;
        self.reset()
    }

    /// Clears the board and hands the first move to X. The mode is kept and
    /// any pending computer reply is dropped.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> DisplayState {
        self.board.reset();
        self.current_turn = HUMAN;
        self.phase = Phase::AwaitingMove;
        info!(mode = ?self.mode, "Game reset");
        self.display_state()
    }

    /// Places the human's mark at `index` and, in computer mode, lets the
    /// computer answer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] when the game is over, the computer
    /// is still to reply, or the cell is out of range or occupied. A rejected
    /// move changes nothing.
    #[instrument(skip(self), fields(mode = ?self.mode, turn = %self.current_turn))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<DisplayState, GameError> {
        match self.phase {
            Phase::Ended(_) => return Err(self.reject(IllegalMove::GameOver)),
            Phase::AutomationPending => return Err(self.reject(IllegalMove::AutomationPending)),
            Phase::AwaitingMove => {}
        }

        let mover = self.current_turn;
        self.board
            .set(index, mover)
            .inspect_err(|e| warn!(index, error = %e, "Rejected move"))?;
        debug!(index, player = %mover, "Move applied");

        if self.settle() {
            return Ok(self.display_state());
        }

        self.current_turn = mover.opponent();
        if self.mode.is_automated() {
            self.phase = Phase::AutomationPending;
            if self.deferred_reply {
                debug!("Computer reply deferred");
            } else {
                self.play_automation_reply()?;
            }
        }

        Ok(self.display_state())
    }

    /// Applies a deferred computer reply.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::NoReplyPending`] when no reply is outstanding.
    #[instrument(skip(self))]
    pub fn resolve_pending_reply(&mut self) -> Result<DisplayState, GameError> {
        if self.phase != Phase::AutomationPending {
            return Err(self.reject(IllegalMove::NoReplyPending));
        }
        self.play_automation_reply()?;
        Ok(self.display_state())
    }

    /// Read-only snapshot for display.
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            cells: *self.board.cells(),
            current_turn: self.current_turn,
            phase: self.phase,
            mode: self.mode,
        }
    }

    /// Lets the active policy move for O. Leaves the session pending if the
    /// policy fails, so the reply can be retried.
    fn play_automation_reply(&mut self) -> Result<(), GameError> {
        let Some(difficulty) = self.mode.difficulty() else {
            self.phase = Phase::AwaitingMove;
            return Ok(());
        };
        let policy = difficulty.policy();

        if let Some(index) = policy.choose_move(&self.board, AUTOMATION, &mut self.rng) {
            self.board.set(index, AUTOMATION)?;
            debug!(index, policy = policy.name(), "Computer moved");
        }

        if !self.settle() {
            self.current_turn = HUMAN;
            self.phase = Phase::AwaitingMove;
        }
        Ok(())
    }

    /// Records a result if the board has one. Returns true when the game ended.
    fn settle(&mut self) -> bool {
        match self.board.winner() {
            Some(outcome) => {
                info!(%outcome, "Game over");
                self.phase = Phase::Ended(outcome);
                true
            }
            None => false,
        }
    }

    fn reject(&self, reason: IllegalMove) -> GameError {
        warn!(%reason, phase = ?self.phase, "Rejected move");
        reason.into()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

/// Snapshot of a session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct DisplayState {
    /// Board cells in row-major order.
    cells: [Cell; 9],
    /// Player to move.
    current_turn: Player,
    /// Lifecycle phase.
    phase: Phase,
    /// Game mode.
    mode: GameMode,
}

impl DisplayState {
    /// The result, once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            Phase::AwaitingMove | Phase::AutomationPending => None,
        }
    }

    /// True until the game ends.
    pub fn is_active(&self) -> bool {
        self.outcome().is_none()
    }

    /// One-line status: whose turn it is, or how the game ended.
    pub fn status_message(&self) -> String {
        match self.phase {
            Phase::Ended(outcome) => outcome.to_string(),
            Phase::AutomationPending => "Computer is thinking...".to_string(),
            Phase::AwaitingMove => format!("It's {}'s turn", self.current_turn),
        }
    }
}
