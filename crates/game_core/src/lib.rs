pub mod error;
pub mod eval;
pub mod game_tree;
pub mod gomoku;
pub mod types;

// Re-export the game contract and reference games (not strategy-specific)
pub use error::*;
pub use eval::*;
pub use game_tree::{GameTree, TreeNodeId, TreeState};
pub use gomoku::{Gomoku, Move};
pub use types::*;

// =============================================================================
// Player trait: implemented by every search strategy (minimax, MCTS, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    /// The best action found (None if the state is terminal)
    pub best_action: Option<A>,
    /// Root value from the searching player's perspective, in [-1, 1]
    pub value: f64,
    /// Number of search nodes visited (for stats and pruning comparisons)
    pub nodes: u64,
}

impl<A> SearchResult<A> {
    /// Result for a root that is already decided: no action, exact outcome value.
    pub fn terminal(end: GameEnd, player: PlayerId) -> Self {
        Self {
            best_action: None,
            value: end.value_for(player).unwrap_or(0.0),
            nodes: 1,
        }
    }
}

/// Trait that all search strategies implement.
///
/// A player is bound to one seat for its whole lifetime, which lets the
/// game driver swap minimax, alpha-beta and MCTS strategies freely.
pub trait Player<S: GameState>: Send {
    /// The seat this player searches for.
    fn player(&self) -> PlayerId;

    /// Search the state and return the chosen action.
    ///
    /// # Panics
    /// When `state.current_player()` is not [`Player::player`]. Calling a
    /// player out of turn is a driver bug, not a recoverable condition.
    fn get_action(&mut self, state: &S) -> SearchResult<S::Action>;

    /// Returns the strategy's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

/// Asserts the turn precondition shared by every [`Player::get_action`].
#[inline]
#[track_caller]
pub fn assert_turn<S: GameState>(state: &S, player: PlayerId) {
    assert_eq!(
        state.current_player(),
        player,
        "get_action called for {} while {} is to move",
        player,
        state.current_player()
    );
}
