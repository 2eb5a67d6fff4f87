//! Medium: complete or block an open line, otherwise play randomly.
//!
//! Lines are scanned in fixed order and the first line that is either a win
//! for the computer or a threat from the opponent decides the move. A line
//! `[a, b, c]` only counts when `a` and `b` hold the same mark and `c` is
//! empty, so gaps at `a` or `b` go unnoticed. A threat on an earlier line
//! beats a win on a later one, and two simultaneous threats are not
//! recognised. Those weaknesses are what make this level beatable.

use super::{MovePolicy, RandomPolicy};
use crate::rules::{LINES, win::completing_cell};
use crate::{Board, Player};
use rand::RngCore;
use tracing::debug;

/// Takes a win or blocks a loss on the first qualifying line.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// The forced cell on the first open line, if any.
    pub fn forced_cell(board: &Board, me: Player) -> Option<usize> {
        LINES.iter().find_map(|&line| {
            completing_cell(board, line, me).or_else(|| completing_cell(board, line, me.opponent()))
        })
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(&self, board: &Board, me: Player, rng: &mut dyn RngCore) -> Option<usize> {
        match Self::forced_cell(board, me) {
            Some(cell) => {
                debug!(player = %me, cell, "Heuristic policy completed a line");
                Some(cell)
            }
            None => RandomPolicy.choose_move(board, me, rng),
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
