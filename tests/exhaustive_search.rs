//! Whole-game-tree checks: pruning equivalence on every reachable board and
//! optimal self-play

use noughts::{
    Mark, Outcome, Pruning, SearchEngine,
    cli::commands::{self_play, verify},
    search::{DRAW_SCORE, WIN_SCORE},
    tictactoe::{decision_boards, reachable_boards},
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_pruning_matches_exhaustive_search_on_every_board() {
    for first in [Mark::X, Mark::O] {
        let report = verify::compare_pruning(first, None);
        assert_eq!(report.boards, decision_boards(first).len());
        assert!(report.mismatches.is_empty(), "{:?}", report.mismatches);
        assert!(report.pruned_nodes < report.exhaustive_nodes);
    }
}

#[test]
fn test_reachable_counts() {
    assert_eq!(reachable_boards(Mark::X).len(), 5478);
    assert_eq!(reachable_boards(Mark::O).len(), 5478);
}

#[test]
fn test_optimal_self_play_always_draws() {
    let mut rng = StdRng::seed_from_u64(42);
    for first in [Mark::X, Mark::O] {
        for pruning in [Pruning::AlphaBeta, Pruning::Disabled] {
            let game = self_play::play_game(first, 0, pruning, &mut rng).unwrap();
            assert_eq!(game.outcome(), Outcome::Draw);
        }
    }
}

#[test]
fn test_engine_never_loses_after_random_openings() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let game = self_play::play_game(Mark::X, 1, Pruning::AlphaBeta, &mut rng).unwrap();
        // one random X move cannot lose a game that is drawn from every opening
        assert_eq!(game.outcome(), Outcome::Draw);
    }
}

#[test]
fn test_every_decision_score_is_exact() {
    for node in decision_boards(Mark::X).into_iter().take(500) {
        let engine = SearchEngine::new(node.to_move);
        let report = engine.search(&node.board);
        let full = engine.with_pruning(Pruning::Disabled).search(&node.board);
        assert_eq!(report.score, full.score);
        assert!(report.score.is_some_and(|s| (-WIN_SCORE..=WIN_SCORE).contains(&s)));
    }
    let root = SearchEngine::new(Mark::X).search(&noughts::Board::new());
    assert_eq!(root.score, Some(DRAW_SCORE));
}
