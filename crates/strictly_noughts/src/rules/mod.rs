//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session and the search share one definition of
//! "terminal".

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner};

use crate::Outcome;

/// Evaluates a position: a completed line, a full board, or `None`.
pub fn evaluate(board: &crate::Board) -> Option<Outcome> {
    if let Some(player) = check_winner(board) {
        Some(Outcome::Winner(player))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
