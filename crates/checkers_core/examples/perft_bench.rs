//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- 8

use checkers_core::{perft, Board, Color};
use std::time::Instant;

fn main() {
    let max_depth: u8 = std::env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(7);

    println!("=== Perft from the opening position ===");
    let board = Board::startpos();
    for depth in 1..=max_depth {
        let start = Instant::now();
        let nodes = perft(&board, Color::White, depth);
        let elapsed = start.elapsed();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!("depth {depth:>2}: {nodes:>12} nodes in {elapsed:>10.3?} ({nps:.0} nodes/sec)");
    }
}
