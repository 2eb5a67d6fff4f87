//! Strictly Noughts - noughts and crosses with a computer opponent
//!
//! Pure game logic with no I/O: front-ends report cell choices to a
//! [`GameSession`] and render the [`DisplayState`] it returns.
//!
//! # Architecture
//!
//! - **Board**: nine cells, win and draw detection ([`Board`], [`rules`])
//! - **Session**: turn order, mode selection, lifecycle ([`GameSession`])
//! - **Policies**: random, heuristic and exhaustive-search move choice
//!   behind one [`MovePolicy`] trait
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Cell, Difficulty, GameMode, GameSession, Phase, Player};
//!
//! let mut session = GameSession::with_seed(GameMode::HumanVsAutomation(Difficulty::Hard), 7);
//! let state = session.apply_human_move(0)?;
//!
//! // The computer answers a corner opening in the center.
//! assert_eq!(state.cells()[4], Cell::Occupied(Player::O));
//! assert_eq!(*state.phase(), Phase::AwaitingMove);
//! # Ok::<(), strictly_noughts::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod mode;
mod position;
mod session;
mod types;

pub mod policy;
pub mod rules;

// Crate-level exports - Errors
pub use error::{GameError, IllegalMove};

// Crate-level exports - Board and domain types
pub use types::{Board, CELL_COUNT, Cell, Outcome, Player};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Modes
pub use mode::{Difficulty, GameMode};

// Crate-level exports - Policies
pub use policy::{HeuristicPolicy, MinimaxPolicy, MovePolicy, RandomPolicy, SearchReport};

// Crate-level exports - Session
pub use session::{AUTOMATION, DisplayState, GameSession, HUMAN, Phase};
