//! Checkers arena
//!
//! This crate provides infrastructure for:
//! - Running matches between engines
//! - Playing a game from the settings file in the terminal
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Play with the bots configured in settings.json
//! cargo run -p arena --bin checkers_arena -- play --settings settings.json
//!
//! # Run a match between the alpha-beta and random engines
//! cargo run -p arena --bin checkers_arena -- match alphabeta random --games 10 --depth 4
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
