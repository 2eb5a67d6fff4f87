//! One-shot move suggestion for a board given on the command line.

use anyhow::{Result, bail};
use derive_getters::Getters;
use rand::RngCore;
use serde::Serialize;
use strictly_noughts::{
    Board, CELL_COUNT, Difficulty, GameError, MinimaxPolicy, Player, Position,
};
use tracing::{debug, instrument};

/// The cell a policy would play, with minimax scores at hard difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Hint {
    player: Player,
    difficulty: Difficulty,
    policy: &'static str,
    cell: usize,
    position: &'static str,
    scores: Option<[Option<i8>; CELL_COUNT]>,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) plays cell {} ({})",
            self.player,
            self.policy,
            self.cell + 1,
            self.position
        )?;
        if let Some(scores) = &self.scores {
            f.write_str("\nscores:")?;
            for (index, score) in scores.iter().enumerate() {
                match score {
                    Some(score) => write!(f, " {}={}", index + 1, score)?,
                    None => write!(f, " {}=-", index + 1)?,
                }
            }
        }
        Ok(())
    }
}

/// Parses `x` or `o` (either case).
pub fn parse_player(s: &str) -> Result<Player, GameError> {
    match s.trim() {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        other => Err(GameError::invalid_configuration(format!(
            "Unknown player {:?} (expected x or o)",
            other
        ))),
    }
}

/// Asks the policy for `difficulty` where `player` should move.
///
/// # Errors
///
/// Fails when the board already has a result.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn compute_hint(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut dyn RngCore,
) -> Result<Hint> {
    if let Some(outcome) = board.winner() {
        bail!("Board is already decided: {}", outcome);
    }

    let policy = difficulty.policy();
    let (cell, scores) = match difficulty {
        Difficulty::Hard => {
            let report = MinimaxPolicy::evaluate(board, player);
            (*report.best(), Some(*report.scores()))
        }
        Difficulty::Easy | Difficulty::Medium => (policy.choose_move(board, player, rng), None),
    };
    let Some(cell) = cell else {
        bail!("No empty cell to play");
    };
    let position = Position::from_index(cell)
        .map(|p| p.label())
        .unwrap_or("?");

    debug!(cell, policy = policy.name(), "Hint computed");
    Ok(Hint {
        player,
        difficulty,
        policy: policy.name(),
        cell,
        position,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strictly_noughts::MovePolicy;

    fn hint(board: &str, player: Player, difficulty: Difficulty) -> Result<Hint> {
        let board: Board = board.parse().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        compute_hint(&board, player, difficulty, &mut rng)
    }

    #[test]
    fn test_hard_answers_corner_with_center() {
        let hint = hint("X........", Player::O, Difficulty::Hard).unwrap();
        assert_eq!(*hint.cell(), 4);
        assert_eq!(hint.position, "Center");
        assert_eq!(hint.policy, "minimax");

        let scores = hint.scores().unwrap();
        assert_eq!(scores[0], None);
        assert_eq!(scores[4], Some(0));
    }

    #[test]
    fn test_hard_cell_matches_best_score() {
        let board: Board = "XX.X..OO.".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let hint = compute_hint(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
        let policy_cell = MinimaxPolicy.choose_move(&board, Player::O, &mut rng);

        assert_eq!(Some(*hint.cell()), policy_cell);
        assert_eq!(*hint.cell(), 2);
        assert_eq!(hint.scores().unwrap()[2], Some(1));
    }

    #[test]
    fn test_medium_blocks_open_line() {
        let hint = hint("XX..O....", Player::O, Difficulty::Medium).unwrap();
        assert_eq!(*hint.cell(), 2);
        assert_eq!(*hint.scores(), None);
    }

    #[test]
    fn test_easy_picks_empty_cell() {
        let hint = hint("XO.XO....", Player::X, Difficulty::Easy).unwrap();
        assert!([2, 5, 6, 7, 8].contains(hint.cell()));
    }

    #[test]
    fn test_decided_board_is_rejected() {
        let err = hint("XXXOO....", Player::O, Difficulty::Hard).unwrap_err();
        assert!(err.to_string().contains("Player X has won!"));

        let err = hint("XOXXOOOXX", Player::O, Difficulty::Hard).unwrap_err();
        assert!(err.to_string().contains("draw"));
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("o").unwrap(), Player::O);
        assert_eq!(parse_player(" X ").unwrap(), Player::X);
        assert!(parse_player("z").is_err());
    }

    #[test]
    fn test_text_and_json_output() {
        let hint = hint("X........", Player::O, Difficulty::Hard).unwrap();
        let text = hint.to_string();
        assert!(text.starts_with("O (minimax) plays cell 5 (Center)"));
        assert!(text.contains(" 1=-"));

        let json: serde_json::Value = serde_json::to_value(&hint).unwrap();
        assert_eq!(json["cell"], 4);
        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["player"], "O");
    }
}
