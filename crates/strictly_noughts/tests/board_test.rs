//! Property-style tests for the board and win detection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use strictly_noughts::rules::{LINES, check_winner};
use strictly_noughts::{Board, Cell, GameError, IllegalMove, Outcome, Player};

fn has_complete_line(board: &Board) -> bool {
    LINES.iter().any(|line| {
        let first = board.get(line[0]);
        first != Some(Cell::Empty) && line.iter().all(|&i| board.get(i) == first)
    })
}

#[test]
fn test_no_result_until_line_or_full() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut to_move = Player::X;

        loop {
            let cell = *board.empty_cells().choose(&mut rng).unwrap();
            board.set(cell, to_move).unwrap();

            match board.winner() {
                None => {
                    assert!(!has_complete_line(&board));
                    assert!(!board.is_full());
                }
                Some(Outcome::Winner(player)) => {
                    assert_eq!(player, to_move, "only the mover can complete a line");
                    assert!(has_complete_line(&board));
                    break;
                }
                Some(Outcome::Draw) => {
                    assert!(board.is_full());
                    assert!(!has_complete_line(&board));
                    break;
                }
            }
            to_move = to_move.opponent();
        }
    }
}

#[test]
fn test_occupied_set_never_changes_board() {
    let mut board: Board = "XO.......".parse().unwrap();
    let before = board;
    for player in [Player::X, Player::O] {
        for index in [0, 1] {
            let err = board.set(index, player).unwrap_err();
            assert_eq!(err, GameError::IllegalMove(IllegalMove::Occupied(index)));
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_check_winner_matches_outcome() {
    let board: Board = "OOOXX.X..".parse().unwrap();
    assert_eq!(check_winner(&board), Some(Player::O));
    assert_eq!(board.winner(), Some(Outcome::Winner(Player::O)));
}
