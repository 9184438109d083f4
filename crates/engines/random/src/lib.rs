//! Random Move Checkers Engine
//!
//! A simple engine that plays a uniformly random legal turn.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation and capture chains

use checkers_core::{apply, color_moves, piece_moves, Board, Color, Engine, TurnResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A checkers engine that plays random legal turns.
///
/// This engine provides no evaluation. It picks a random move and, when
/// that move is a capture, keeps picking random continuations for the same
/// piece until the chain is over.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible engine for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn find_best_turns(&mut self, board: &Board, side: Color) -> TurnResult {
        self.nodes = 1;

        let set = color_moves(board, side);
        let Some(&first) = set.moves.choose(&mut self.rng) else {
            return TurnResult::default();
        };

        let mut turns = vec![first];
        if set.has_captures {
            let mut pos = apply(board, first);
            let mut at = first.to;
            loop {
                let cont = piece_moves(&pos, at);
                if !cont.has_captures {
                    break;
                }
                let Some(&step) = cont.moves.choose(&mut self.rng) else {
                    break;
                };
                self.nodes += 1;
                pos = apply(&pos, step);
                at = step.to;
                turns.push(step);
            }
        }

        TurnResult {
            turns,
            score: 0.0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
