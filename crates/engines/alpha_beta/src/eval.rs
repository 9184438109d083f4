//! Material ratio evaluation.

use checkers_core::{Board, Cell, Color, Square};

use crate::config::ScoringMode;

/// Score of a won position. Larger than any material ratio on an 8x8 board.
pub const INF: f64 = 1e9;

/// Bonus per row a man has advanced toward its promotion row.
const POTENTIAL_PER_ROW: f64 = 0.05;

fn rows_advanced(s: Square, c: Color) -> f64 {
    match c {
        Color::White => (7 - s.row) as f64,
        Color::Black => s.row as f64,
    }
}

/// Evaluates the position from `maximizer`'s point of view.
///
/// Returns a non-negative score, higher is better for `maximizer`:
/// - `INF` when the opponent has no pieces left
/// - `0` when `maximizer` has no pieces left
/// - otherwise own weighted material divided by the opponent's
pub fn evaluate(board: &Board, maximizer: Color, mode: ScoringMode) -> f64 {
    let mut men = [0.0f64; 2];
    let mut kings = [0.0f64; 2];

    for (s, cell) in board.pieces() {
        match cell {
            Cell::Man(c) => {
                men[c.idx()] += 1.0;
                if mode.counts_potential() {
                    men[c.idx()] += POTENTIAL_PER_ROW * rows_advanced(s, c);
                }
            }
            Cell::King(c) => kings[c.idx()] += 1.0,
            Cell::Empty => {}
        }
    }

    let own = maximizer.idx();
    let opp = maximizer.other().idx();
    if men[opp] + kings[opp] == 0.0 {
        return INF;
    }
    if men[own] + kings[own] == 0.0 {
        return 0.0;
    }

    let k = mode.king_weight();
    (men[own] + kings[own] * k) / (men[opp] + kings[opp] * k)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
