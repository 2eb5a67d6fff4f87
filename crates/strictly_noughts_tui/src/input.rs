//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use strictly_noughts::{Difficulty, Position};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the given cell.
    Place(Position),
    /// Play the cell under the cursor.
    PlaceAtCursor,
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Switch to two-player mode.
    TwoPlayer,
    /// Switch to computer mode at the current difficulty.
    Computer,
    /// Switch to computer mode at this difficulty.
    Difficulty(Difficulty),
    /// Start the game over.
    Restart,
    /// Leave the app.
    Quit,
}

/// Maps a key to a command. Keys 1-9 address cells in reading order.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Command::Cursor(key)),
        KeyCode::Char('p') => Some(Command::TwoPlayer),
        KeyCode::Char('c') => Some(Command::Computer),
        KeyCode::Char('e') => Some(Command::Difficulty(Difficulty::Easy)),
        KeyCode::Char('m') => Some(Command::Difficulty(Difficulty::Medium)),
        KeyCode::Char('h') => Some(Command::Difficulty(Difficulty::Hard)),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
