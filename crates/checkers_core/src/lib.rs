pub mod board;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use perft::{full_turns, perft};
pub use types::*;

// =============================================================================
// Engine trait, implemented by all checkers engines (alpha-beta, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct TurnResult {
    /// The full turn to play, in order. Empty if the side has no legal move.
    /// Holds more than one step only for a chain of captures.
    pub turns: Vec<Move>,
    /// Score of the chosen line from the engine's perspective
    pub score: f64,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

impl TurnResult {
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Trait that all checkers engines must implement.
///
/// Engines never mutate the caller's board; they return the turn sequence
/// for the caller to apply.
pub trait Engine: Send {
    /// Choose a full turn for `side` on `board`.
    fn find_best_turns(&mut self, board: &Board, side: Color) -> TurnResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "checkers"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
