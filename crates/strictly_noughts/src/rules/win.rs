//! Win detection.

use crate::{Board, Cell, Player};

/// Three cell indices forming a winning pattern.
pub type Line = [usize; 3];

/// The eight winning lines, in the order every scan uses.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the player holding all three cells of some line.
///
/// A reachable position has at most one winner, so the scan order never
/// changes the answer.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a)?;
        match cell {
            Cell::Occupied(player) if board.get(b) == Some(cell) && board.get(c) == Some(cell) => {
                Some(player)
            }
            _ => None,
        }
    })
}

/// If `player` holds the first two cells of `line` and the last is empty,
/// returns the last cell.
///
/// Only the `[a, b] -> c` orientation counts: a gap at `a` or `b` is not
/// reported.
pub fn completing_cell(board: &Board, [a, b, c]: Line, player: Player) -> Option<usize> {
    let mark = Cell::Occupied(player);
    (board.get(a)? == mark && board.get(b)? == mark && board.get(c)? == Cell::Empty).then_some(c)
}
