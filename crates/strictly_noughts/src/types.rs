//! Core domain types for noughts and crosses.

use crate::error::{GameError, IllegalMove};
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (always moves first; the human in computer mode).
    X,
    /// Player O (moves second; the computer in computer mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// The board filled up with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} has won!", player),
            Outcome::Draw => write!(f, "Game is a draw!"),
        }
    }
}

/// 3x3 board.
///
/// Only [`Board::set`], [`Board::clear`] and [`Board::reset`] change a cell,
/// so the occupied cells are exactly the ones that were explicitly set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Indices outside 0-8 are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfRange`] or [`IllegalMove::Occupied`];
    /// the board is left untouched in both cases.
    pub fn set(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        match self.cells.get_mut(index) {
            None => Err(IllegalMove::OutOfRange(index).into()),
            Some(Cell::Occupied(_)) => Err(IllegalMove::Occupied(index).into()),
            Some(cell) => {
                *cell = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Empties a single cell. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Returns the result of the position, or `None` while play continues.
    pub fn winner(&self) -> Option<Outcome> {
        rules::evaluate(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Returns all cells as an array.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses nine cells written as `X`, `O` and `.`, `_` or `-` for empty.
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if index == CELL_COUNT {
                return Err(GameError::invalid_configuration(format!(
                    "Board {:?} has more than {} cells",
                    s, CELL_COUNT
                )));
            }
            match ch.to_ascii_uppercase() {
                'X' => board.cells[index] = Cell::Occupied(Player::X),
                'O' => board.cells[index] = Cell::Occupied(Player::O),
                '.' | '_' | '-' => {}
                other => {
                    return Err(GameError::invalid_configuration(format!(
                        "Unexpected character {:?} in board",
                        other
                    )));
                }
            }
            index += 1;
        }
        if index != CELL_COUNT {
            return Err(GameError::invalid_configuration(format!(
                "Board {:?} has {} cells, expected {}",
                s, index, CELL_COUNT
            )));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(4, Player::X).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Player::X)));
        assert!(!board.is_empty(4));
        assert!(board.is_empty(0));
    }

    #[test]
    fn test_set_occupied_is_rejected() {
        let mut board = Board::new();
        board.set(0, Player::X).unwrap();
        let before = board;

        let err = board.set(0, Player::O).unwrap_err();
        assert_eq!(err, GameError::IllegalMove(IllegalMove::Occupied(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_out_of_range_is_rejected() {
        let mut board = Board::new();
        let err = board.set(9, Player::X).unwrap_err();
        assert_eq!(err.illegal_move(), Some(IllegalMove::OutOfRange(9)));
        assert_eq!(board, Board::new());
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_clear_and_reset() {
        let mut board: Board = "XO.X.....".parse().unwrap();
        board.clear(0);
        assert!(board.is_empty(0));
        assert_eq!(board.count(Player::X), 1);

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board: Board = "X.O.X.O.X".parse().unwrap();
        assert_eq!(board.empty_cells(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "X|O|. \n .|X|. \n .|.|O".parse().unwrap();
        assert_eq!(board.get(1), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.get(8), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.count(Player::X), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XO".parse::<Board>(),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            "XOZ......".parse::<Board>(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
