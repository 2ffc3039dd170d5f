//! Minimax Search Players
//!
//! Three classical adversarial searches behind the common [`Player`] trait:
//! - [`MinimaxPlayer`]: exhaustive minimax
//! - [`AlphaBetaPlayer`]: minimax with alpha-beta pruning
//! - [`CuttingOffAlphaBetaPlayer`]: depth-limited alpha-beta with a heuristic
//!
//! The first two search to the end of the game and are only practical on
//! small games; bounding the game size is the caller's job.

mod search;

use game_core::{
    assert_turn, get_evaluation_func, EvalError, EvaluationFn, GameState, Player, PlayerId,
    SearchResult,
};
use tracing::debug;

pub use search::{alpha_beta, cutting_off_alpha_beta, evaluate_for, minimax, Scored};

/// Exhaustive minimax player.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    player: PlayerId,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxPlayer {
    pub fn new(player: PlayerId) -> Self {
        Self { player, nodes: 0 }
    }
}

impl<S: GameState> Player<S> for MinimaxPlayer {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn get_action(&mut self, state: &S) -> SearchResult<S::Action> {
        assert_turn(state, self.player);
        self.nodes = 0;

        let (value, best_action) = minimax(state, self.player, &mut self.nodes);
        debug!(player = %self.player, nodes = self.nodes, value, "minimax search done");

        SearchResult {
            best_action,
            value,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Alpha-beta player. Same decisions as [`MinimaxPlayer`] up to ties, fewer nodes.
#[derive(Debug, Clone)]
pub struct AlphaBetaPlayer {
    player: PlayerId,
    nodes: u64,
}

impl AlphaBetaPlayer {
    pub fn new(player: PlayerId) -> Self {
        Self { player, nodes: 0 }
    }
}

impl<S: GameState> Player<S> for AlphaBetaPlayer {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn get_action(&mut self, state: &S) -> SearchResult<S::Action> {
        assert_turn(state, self.player);
        self.nodes = 0;

        let (value, best_action) = alpha_beta(
            state,
            self.player,
            f64::NEG_INFINITY,
            f64::INFINITY,
            &mut self.nodes,
        );
        debug!(player = %self.player, nodes = self.nodes, value, "alpha-beta search done");

        SearchResult {
            best_action,
            value,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Depth-limited alpha-beta that scores the frontier with an evaluation function.
///
/// One unit of `max_depth` is a full round (the player and the opponent
/// each move once).
pub struct CuttingOffAlphaBetaPlayer<S: GameState> {
    player: PlayerId,
    max_depth: u32,
    evaluation: EvaluationFn<S>,
    name: String,
    nodes: u64,
}

impl<S: GameState> CuttingOffAlphaBetaPlayer<S> {
    pub fn new(player: PlayerId, max_depth: u32, evaluation: EvaluationFn<S>) -> Self {
        Self {
            player,
            max_depth,
            evaluation,
            name: format!("CuttingOffAlphaBeta(d={max_depth})"),
            nodes: 0,
        }
    }

    /// Builds the player with an evaluation function from the registry.
    pub fn with_evaluation_name(
        player: PlayerId,
        max_depth: u32,
        evaluation: &str,
    ) -> Result<Self, EvalError> {
        let mut built = Self::new(player, max_depth, get_evaluation_func(evaluation)?);
        built.name = format!("CuttingOffAlphaBeta(d={max_depth}, {evaluation})");
        Ok(built)
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl<S: GameState> Player<S> for CuttingOffAlphaBetaPlayer<S> {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn get_action(&mut self, state: &S) -> SearchResult<S::Action> {
        assert_turn(state, self.player);
        self.nodes = 0;

        let (value, best_action) = cutting_off_alpha_beta(
            state,
            self.player,
            self.max_depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            self.evaluation,
            &mut self.nodes,
        );
        debug!(
            player = %self.player,
            depth = self.max_depth,
            nodes = self.nodes,
            value,
            "cutting-off search done"
        );

        SearchResult {
            best_action,
            value,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
