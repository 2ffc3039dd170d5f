//! Monte Carlo Tree Search Players
//!
//! UCT search over an arena-allocated tree, in two flavours:
//! - Pure MCTS: leaves are valued with uniform random rollouts
//! - AlphaZero-lite: leaves are valued with one evaluation function call
//!
//! Each playout selects by `Q + c * sqrt(ln N / n)`, expands exactly one
//! untried action, values the new leaf and backs the value up with the sign
//! flipped at every node owned by the other player. The move played is the
//! most visited root child.
//!
//! # Example
//!
//! ```
//! use game_core::{gomoku::FIRST, Gomoku, Player};
//! use mcts_engine::{MctsConfig, MctsPlayer};
//!
//! let mut player = MctsPlayer::<Gomoku>::pure(FIRST, MctsConfig::for_testing());
//! let result = player.get_action(&Gomoku::tictactoe());
//! assert!(result.best_action.is_some());
//! ```

pub mod config;
pub mod evaluator;
pub mod node;
pub mod player;
pub mod search;
pub mod tree;

pub use config::MctsConfig;
pub use evaluator::LeafEvaluator;
pub use node::{MctsNode, NodeId};
pub use player::MctsPlayer;
pub use search::{run_mcts, MctsSearch};
pub use tree::MctsTree;
