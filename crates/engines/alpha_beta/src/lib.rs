//! Alpha-Beta Checkers Engine
//!
//! Minimax search with alpha-beta pruning over full turns, including
//! mandatory capture chains, scored by a material ratio heuristic.

pub mod config;
mod eval;
mod search;

use std::time::{SystemTime, UNIX_EPOCH};

use checkers_core::{color_moves, piece_moves, Board, Color, Engine, MoveSet, Square, TurnResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub use config::{BotSettings, ScoringMode, SearchConfig, Settings, SettingsError};
pub use eval::{evaluate, INF};
pub use search::{find_best_turns, SearchOutcome};

/// Checkers engine using minimax with alpha-beta pruning.
///
/// Besides the full search it exposes plain move listing for a color or a
/// single piece, and keeps the last listed [`MoveSet`] so interactive callers
/// can highlight legal destinations.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    config: SearchConfig,
    /// Shuffles listed moves and salts each search's move ordering
    rng: StdRng,
    last: MoveSet,
    /// Node counter for statistics
    nodes: u64,
}

fn seeded_rng(deterministic: bool) -> StdRng {
    if deterministic {
        return StdRng::seed_from_u64(0);
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(now)
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            rng: seeded_rng(config.deterministic),
            config,
            last: MoveSet::default(),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Swap in a reloaded configuration. Reseeds the move-order generator.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.rng = seeded_rng(config.deterministic);
        self.config = config;
    }

    /// Legal moves for `color` in shuffled order. Captures only, if any exist.
    pub fn find_turns(&mut self, board: &Board, color: Color) -> MoveSet {
        let mut set = color_moves(board, color);
        set.moves.shuffle(&mut self.rng);
        self.last = set.clone();
        set
    }

    /// Legal moves of the piece on `square`. The square must hold a piece.
    pub fn find_turns_at(&mut self, board: &Board, square: Square) -> MoveSet {
        let set = piece_moves(board, square);
        self.last = set.clone();
        set
    }

    /// The move set computed by the last `find_turns*` call.
    pub fn last_turns(&self) -> &MoveSet {
        &self.last
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for AlphaBetaEngine {
    fn find_best_turns(&mut self, board: &Board, side: Color) -> TurnResult {
        let salt: u64 = self.rng.gen();
        let outcome = find_best_turns(board, side, &self.config, salt);
        self.nodes = outcome.nodes;

        debug!(
            %side,
            depth = self.config.depth,
            score = outcome.score,
            nodes = outcome.nodes,
            turns = ?outcome.turns,
            "search finished"
        );

        TurnResult {
            turns: outcome.turns,
            score: outcome.score,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.last = MoveSet::default();
    }
}
