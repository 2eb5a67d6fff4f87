//! Hard: full-depth minimax.
//!
//! Each empty cell is tried for the computer on a private copy of the board,
//! the rest of the game is searched to the end with both sides playing
//! perfectly, and the trial mark is removed again. Terminal positions score
//! +1 for a computer win, -1 for a loss and 0 for a draw. Depth is counted
//! for reporting only; a quick win and a slow win score the same.

use super::MovePolicy;
use crate::types::CELL_COUNT;
use crate::{Board, Outcome, Player};
use derive_getters::Getters;
use rand::RngCore;
use serde::Serialize;
use tracing::{debug, instrument};

/// Plays the first cell with the best minimax score.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxPolicy;

/// Result of searching one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SearchReport {
    /// Score of each cell for the searching player; `None` for occupied cells.
    scores: [Option<i8>; CELL_COUNT],
    /// Lowest index with the highest score.
    best: Option<usize>,
    /// Positions visited.
    nodes: u64,
    /// Deepest ply reached below the root.
    max_depth: usize,
}

impl MinimaxPolicy {
    /// Scores every empty cell for `me`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn evaluate(board: &Board, me: Player) -> SearchReport {
        let mut search = Search {
            me,
            nodes: 0,
            max_depth: 0,
        };
        let mut trial = *board;
        let mut scores = [None; CELL_COUNT];
        let mut best: Option<(usize, i8)> = None;

        for index in board.empty_cells() {
            if trial.set(index, me).is_err() {
                continue;
            }
            let score = search.minimax(&mut trial, me.opponent(), 1);
            trial.clear(index);

            scores[index] = Some(score);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        let report = SearchReport {
            scores,
            best: best.map(|(index, _)| index),
            nodes: search.nodes,
            max_depth: search.max_depth,
        };
        debug!(
            player = %me,
            best = ?report.best,
            nodes = report.nodes,
            max_depth = report.max_depth,
            "Minimax search finished"
        );
        report
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose_move(&self, board: &Board, me: Player, _rng: &mut dyn RngCore) -> Option<usize> {
        Self::evaluate(board, me).best
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

struct Search {
    me: Player,
    nodes: u64,
    max_depth: usize,
}

impl Search {
    fn minimax(&mut self, board: &mut Board, to_move: Player, depth: usize) -> i8 {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);

        if let Some(outcome) = board.winner() {
            return self.score(outcome);
        }

        let maximizing = to_move == self.me;
        let mut best = if maximizing { i8::MIN } else { i8::MAX };
        for index in 0..CELL_COUNT {
            if board.set(index, to_move).is_err() {
                continue;
            }
            let score = self.minimax(board, to_move.opponent(), depth + 1);
            board.clear(index);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    fn score(&self, outcome: Outcome) -> i8 {
        match outcome {
            Outcome::Winner(player) if player == self.me => 1,
            Outcome::Winner(_) => -1,
            Outcome::Draw => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(board: &str, me: Player) -> Option<usize> {
        MinimaxPolicy::evaluate(&board.parse().unwrap(), me).best
    }

    #[test]
    fn test_center_reply_to_corner_opening() {
        assert_eq!(best("X........", Player::O), Some(4));
    }

    #[test]
    fn test_only_center_holds_the_draw() {
        let report = MinimaxPolicy::evaluate(&"X........".parse().unwrap(), Player::O);
        assert_eq!(report.scores()[0], None);
        assert_eq!(report.scores()[4], Some(0));
        for cell in [1, 2, 3, 5, 6, 7, 8] {
            assert_eq!(report.scores()[cell], Some(-1), "cell {}", cell);
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X O / . X O / . . . : column 2 closes at 8.
        assert_eq!(best("XXO.XO...", Player::O), Some(8));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X threatens row 0 at 2, O wins row 2 at 6.
        let report = MinimaxPolicy::evaluate(&"XX...X.OO".parse().unwrap(), Player::O);
        assert_eq!(report.scores()[2], Some(0));
        assert_eq!(report.scores()[6], Some(1));
        assert_eq!(*report.best(), Some(6));
    }

    #[test]
    fn test_forced_win_scores_like_immediate_win() {
        // X X . / X . . / O O . : 8 wins now, 2 blocks row 0 and leaves O a
        // double threat. Both score +1 and the lower index is chosen.
        let report = MinimaxPolicy::evaluate(&"XX.X..OO.".parse().unwrap(), Player::O);
        assert_eq!(report.scores()[2], Some(1));
        assert_eq!(report.scores()[4], Some(-1));
        assert_eq!(report.scores()[5], Some(-1));
        assert_eq!(report.scores()[8], Some(1));
        assert_eq!(*report.best(), Some(2));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        assert_eq!(best("XX..O....", Player::O), Some(2));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // From the empty board every cell draws; index 0 comes first.
        let report = MinimaxPolicy::evaluate(&Board::new(), Player::X);
        assert!(report.scores().iter().all(|s| *s == Some(0)));
        assert_eq!(*report.best(), Some(0));
        assert_eq!(*report.max_depth(), 9);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let report = MinimaxPolicy::evaluate(&"XOXOXXOXO".parse().unwrap(), Player::O);
        assert_eq!(*report.best(), None);
        assert_eq!(*report.nodes(), 0);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board: Board = "X...O...X".parse().unwrap();
        let copy = board;
        let _ = MinimaxPolicy::evaluate(&board, Player::O);
        assert_eq!(board, copy);
    }
}
