//! Easy: uniformly random empty cell.

use super::MovePolicy;
use crate::{Board, Player};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(&self, board: &Board, me: Player, rng: &mut dyn RngCore) -> Option<usize> {
        let choice = board.empty_cells().choose(rng).copied();
        debug!(player = %me, ?choice, "Random policy chose cell");
        choice
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
