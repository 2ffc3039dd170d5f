//! Tournament Runner for k-in-a-row players
//!
//! This crate provides infrastructure for:
//! - Building any search strategy from a short spec string (`cutoff:2:detailed`)
//! - Running matches and gauntlets between strategies
//! - Tracking Elo ratings across runs
//! - Generating reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match on a 9x9 board, five in a row
//! cargo run -p tournament -- match cutoff:2:detailed alphazero:detailed:500 --games 10 --board 9
//!
//! # Run a gauntlet (one player vs many)
//! cargo run -p tournament -- gauntlet mcts:2000 --games 4
//!
//! # Score a position with an evaluation function
//! cargo run -p tournament -- evaluate detailed --moves "7,7;7,8;8,8"
//! ```

mod config;
mod elo;
mod error;
mod match_runner;
mod results;
mod roster;

pub use config::*;
pub use elo::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
pub use roster::*;
