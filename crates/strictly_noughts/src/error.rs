//! Error types for the game core.
//!
//! Every error here is local and recoverable: the operation that produced it
//! was rejected and the session or board it targeted is unchanged.

use tracing::instrument;

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// The index does not address one of the nine cells.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The automation reply has not been applied yet.
    #[display("Waiting for the computer to move")]
    AutomationPending,

    /// There is no deferred automation reply to apply.
    #[display("No computer reply is pending")]
    NoReplyPending,
}

/// Errors produced by the game core.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A move was rejected.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// A mode, difficulty or board description was not recognised.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(#[error(not(source))] String),
}

impl GameError {
    /// Creates an [`GameError::InvalidConfiguration`] from any message.
    #[instrument(skip(message))]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Returns the rejected move reason, if this is an illegal move.
    pub fn illegal_move(&self) -> Option<IllegalMove> {
        match self {
            Self::IllegalMove(reason) => Some(*reason),
            Self::InvalidConfiguration(_) => None,
        }
    }
}

impl From<IllegalMove> for GameError {
    fn from(reason: IllegalMove) -> Self {
        Self::IllegalMove(reason)
    }
}
