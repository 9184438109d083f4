use super::*;
use alpha_beta_engine::{AlphaBetaEngine, SearchConfig};
use checkers_core::{Board, TurnResult};
use random_engine::RandomEngine;

#[test]
fn test_self_play() {
    let mut engine1 = AlphaBetaEngine::new(SearchConfig::depth(2));
    let mut engine2 = AlphaBetaEngine::new(SearchConfig::depth(2));

    let config = MatchConfig {
        num_games: 2,
        max_turns: 40,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_random_vs_random_finishes() {
    let mut engine1 = RandomEngine::with_seed(11);
    let mut engine2 = RandomEngine::with_seed(12);

    let config = MatchConfig {
        num_games: 4,
        verbose: false,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);
    assert_eq!(result.total_games(), 4);
}

/// Engine that never finds a move, to check loss handling.
struct Resigner;

impl Engine for Resigner {
    fn find_best_turns(&mut self, _board: &Board, _side: Color) -> TurnResult {
        TurnResult::default()
    }

    fn name(&self) -> &str {
        "Resigner"
    }
}

#[test]
fn test_side_without_move_loses() {
    let config = MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    };
    let mut resigner = Resigner;
    let mut random = RandomEngine::with_seed(4);
    let result = MatchRunner::new(config).run_match(&mut resigner, &mut random);
    assert_eq!(result.losses, 2);
}

#[test]
fn test_zero_turn_limit_is_draw() {
    let config = MatchConfig {
        num_games: 1,
        max_turns: 0,
        verbose: false,
        ..Default::default()
    };
    let mut a = RandomEngine::with_seed(1);
    let mut b = RandomEngine::with_seed(2);
    let result = MatchRunner::new(config).run_match(&mut a, &mut b);
    assert_eq!(result.draws, 1);
}

#[test]
fn test_alpha_beta_beats_random() {
    let mut engine1 = AlphaBetaEngine::new(SearchConfig::depth(3));
    let mut engine2 = RandomEngine::with_seed(99);

    let config = MatchConfig {
        num_games: 2,
        max_turns: 200,
        verbose: false,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);
    assert_eq!(result.total_games(), 2);
    assert!(result.wins >= 1, "alpha-beta failed to beat random: {result:?}");
}
