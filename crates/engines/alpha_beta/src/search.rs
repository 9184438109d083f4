//! Minimax search with alpha-beta pruning and capture-chain expansion
//!
//! Depth parity decides the role of a ply: after the root turn the opponent
//! replies at depth 0 (minimizing), the root side answers at depth 1
//! (maximizing), and so on. A capture chain is one indivisible turn, so its
//! continuations are searched at the same depth as the jump that started it.

use checkers_core::{apply, color_moves, piece_moves, Board, Color, Move, MoveSet, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SearchConfig;
use crate::eval::{evaluate, INF};

/// Score below every real evaluation, used before any move is scored.
const NO_SCORE: f64 = -1.0;

/// Result of a full-turn search.
pub struct SearchOutcome {
    /// Turn sequence for the side to move, empty if it has no legal move
    pub turns: Vec<Move>,
    /// Backed-up score of that sequence
    pub score: f64,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Searches the position and returns the best full turn for `side`.
///
/// # Arguments
/// * `board` - The position to search
/// * `side` - Side to move, the maximizing player
/// * `config` - Depth, scoring mode and pruning switch
/// * `salt` - Seed mixed with each position key to order sibling moves
///
/// For a fixed `salt` the move order at every node depends only on the
/// position, so switching pruning on or off cannot change the returned turn.
pub fn find_best_turns(board: &Board, side: Color, config: &SearchConfig, salt: u64) -> SearchOutcome {
    let mut searcher = Searcher {
        config,
        root: side,
        salt,
        nodes: 0,
    };
    let (score, turns) = searcher.best_turn(*board, side, None, NO_SCORE);
    SearchOutcome {
        turns,
        score,
        nodes: searcher.nodes,
    }
}

struct Searcher<'a> {
    config: &'a SearchConfig,
    root: Color,
    salt: u64,
    nodes: u64,
}

impl Searcher<'_> {
    /// Moves for `color` in a shuffled order keyed by the position.
    fn ordered_moves(&self, board: &Board, color: Color) -> MoveSet {
        let mut set = color_moves(board, color);
        let mut rng = StdRng::seed_from_u64(self.salt ^ board.key());
        set.moves.shuffle(&mut rng);
        set
    }

    fn moves(&self, board: &Board, color: Color, chain: Option<Square>) -> MoveSet {
        match chain {
            Some(at) => piece_moves(board, at),
            None => self.ordered_moves(board, color),
        }
    }

    /// Chooses the root side's turn, following capture chains to their end.
    ///
    /// `chain` is the square of the piece in the middle of a capture chain.
    /// Returns the best score and the turn that reaches it; `alpha` is only
    /// handed on once the chain is over and the opponent replies.
    fn best_turn(
        &mut self,
        board: Board,
        color: Color,
        chain: Option<Square>,
        alpha: f64,
    ) -> (f64, Vec<Move>) {
        self.nodes += 1;
        let set = self.moves(&board, color, chain);

        // chain finished, the opponent answers
        if chain.is_some() && !set.has_captures {
            let score = self.minimax(board, color.other(), 0, alpha, INF + 1.0, None);
            return (score, Vec::new());
        }

        let mut best_score = NO_SCORE;
        let mut best_turns = Vec::new();
        for mv in set.moves {
            let next = apply(&board, mv);
            let (score, tail) = if set.has_captures {
                self.best_turn(next, color, Some(mv.to), best_score)
            } else {
                let score = self.minimax(next, color.other(), 0, best_score, INF + 1.0, None);
                (score, Vec::new())
            };

            if score > best_score {
                best_score = score;
                best_turns.clear();
                best_turns.push(mv);
                best_turns.extend(tail);
            }
        }
        (best_score, best_turns)
    }

    /// Depth-limited minimax. Odd depths are the root side's plies.
    fn minimax(
        &mut self,
        board: Board,
        color: Color,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        chain: Option<Square>,
    ) -> f64 {
        self.nodes += 1;
        if depth == self.config.depth {
            return evaluate(&board, self.root, self.config.scoring);
        }

        let set = self.moves(&board, color, chain);

        if chain.is_some() && !set.has_captures {
            return self.minimax(board, color.other(), depth + 1, alpha, beta, None);
        }

        let maximizing = depth % 2 == 1;
        if set.is_empty() {
            // the side to move is stuck and loses
            return if maximizing { 0.0 } else { INF };
        }

        let mut min_score = INF + 1.0;
        let mut max_score = NO_SCORE;
        for mv in set.moves {
            let next = apply(&board, mv);
            let score = if set.has_captures {
                self.minimax(next, color, depth, alpha, beta, Some(mv.to))
            } else {
                self.minimax(next, color.other(), depth + 1, alpha, beta, None)
            };

            min_score = min_score.min(score);
            max_score = max_score.max(score);
            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }

            if self.config.pruning && alpha >= beta {
                return if maximizing { beta } else { alpha };
            }
        }

        if maximizing {
            max_score
        } else {
            min_score
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
