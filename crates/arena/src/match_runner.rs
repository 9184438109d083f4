//! Match runner for playing games between engines

use checkers_core::{Color, Engine, Game, Outcome};
use tracing::{debug, info};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum turns per game before declaring a draw
    pub max_turns: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_turns: 150,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is black
                self.play_game(engine2, engine1).flip()
            };
            result.record(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                info!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns result from white's perspective
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut game = Game::new();
        white.new_game();
        black.new_game();

        while game.turns_played() < self.config.max_turns {
            let side = game.side_to_move;
            let result = match side {
                Color::White => white.find_best_turns(&game.board, side),
                Color::Black => black.find_best_turns(&game.board, side),
            };

            if result.is_empty() {
                // No move: the side to move loses
                return match side {
                    Color::White => GameResult::Loss,
                    Color::Black => GameResult::Win,
                };
            }

            debug!(turn = game.turns_played(), %side, turns = ?result.turns, "turn");
            game.play_turn(&result.turns);
        }

        // A side may have been stuck right at the limit
        match game.outcome() {
            Some(Outcome::Win(Color::White)) => GameResult::Win,
            Some(Outcome::Win(Color::Black)) => GameResult::Loss,
            _ => GameResult::Draw,
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
