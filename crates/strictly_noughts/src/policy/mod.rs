//! Computer move selection.
//!
//! Every strength level implements [`MovePolicy`]. Policies read the board and
//! propose an index; only the session writes to the board.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicPolicy;
pub use minimax::{MinimaxPolicy, SearchReport};
pub use random::RandomPolicy;

use crate::{Board, Difficulty, Player};
use rand::RngCore;

/// Chooses a cell for the computer.
pub trait MovePolicy: std::fmt::Debug + Send + Sync {
    /// Proposes an empty cell for `me` to play.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn choose_move(&self, board: &Board, me: Player, rng: &mut dyn RngCore) -> Option<usize>;

    /// Short name for logs and display.
    fn name(&self) -> &'static str;
}

static RANDOM: RandomPolicy = RandomPolicy;
static HEURISTIC: HeuristicPolicy = HeuristicPolicy;
static MINIMAX: MinimaxPolicy = MinimaxPolicy;

impl Difficulty {
    /// The policy that plays at this difficulty.
    pub fn policy(self) -> &'static dyn MovePolicy {
        match self {
            Difficulty::Easy => &RANDOM,
            Difficulty::Medium => &HEURISTIC,
            Difficulty::Hard => &MINIMAX,
        }
    }
}
