//! Tests for the computer move policies against the session.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_noughts::{
    Board, Difficulty, GameMode, GameSession, HeuristicPolicy, MinimaxPolicy, MovePolicy,
    Outcome, Player, RandomPolicy,
};

fn board(cells: &str) -> Board {
    cells.parse().expect("valid board")
}

/// Plays every possible human line against the hard computer.
fn explore(session: &GameSession, games: &mut usize) {
    if let Some(outcome) = session.outcome() {
        assert_ne!(
            outcome,
            Outcome::Winner(Player::X),
            "computer lost:\n{}",
            session.board()
        );
        *games += 1;
        return;
    }
    for index in session.board().empty_cells() {
        let mut next = session.clone();
        next.apply_human_move(index).expect("empty cell");
        explore(&next, games);
    }
}

#[test]
fn test_hard_computer_never_loses() {
    let session = GameSession::with_seed(GameMode::HumanVsAutomation(Difficulty::Hard), 0);
    let mut games = 0;
    explore(&session, &mut games);
    assert!(games > 0);
}

#[test]
fn test_heuristic_takes_win() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        HeuristicPolicy.choose_move(&board("OO......."), Player::O, &mut rng),
        Some(2)
    );
}

#[test]
fn test_heuristic_blocks() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        HeuristicPolicy.choose_move(&board("XX......."), Player::O, &mut rng),
        Some(2)
    );
}

#[test]
fn test_minimax_answers_corner_with_center() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        MinimaxPolicy.choose_move(&board("X........"), Player::O, &mut rng),
        Some(4)
    );
}

#[test]
fn test_minimax_plays_either_side() {
    // X to move with an open row: X completes it.
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        MinimaxPolicy.choose_move(&board("XX.OO...."), Player::X, &mut rng),
        Some(2)
    );
}

#[test]
fn test_random_policy_picks_empty_cells() {
    let position = board("XOX.O.X..");
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cell = RandomPolicy.choose_move(&position, Player::O, &mut rng).unwrap();
        assert!(position.is_empty(cell));
    }
}

#[test]
fn test_every_policy_declines_full_board() {
    let full = board("XOXOXXOXO");
    let mut rng = StdRng::seed_from_u64(0);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(difficulty.policy().choose_move(&full, Player::O, &mut rng), None);
    }
}

#[test]
fn test_hard_beats_easy_or_draws() {
    // Random X against minimax O, many seeds: O never loses.
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Board::new();
        let mut to_move = Player::X;
        while position.winner().is_none() {
            let policy: &dyn MovePolicy = match to_move {
                Player::X => &RandomPolicy,
                Player::O => &MinimaxPolicy,
            };
            let cell = policy.choose_move(&position, to_move, &mut rng).unwrap();
            position.set(cell, to_move).unwrap();
            to_move = to_move.opponent();
        }
        assert_ne!(position.winner(), Some(Outcome::Winner(Player::X)), "seed {}", seed);
    }
}
