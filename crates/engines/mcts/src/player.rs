//! [`Player`] adapter around the search.

use game_core::{
    assert_turn, get_evaluation_func, EvalError, EvaluationFn, GameState, Player, PlayerId,
    SearchResult,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::MctsConfig;
use crate::evaluator::LeafEvaluator;
use crate::search::MctsSearch;

/// MCTS player. Builds a fresh tree for every decision.
///
/// [`MctsPlayer::pure`] values leaves with random rollouts,
/// [`MctsPlayer::alpha_zero`] with an evaluation function.
pub struct MctsPlayer<S: GameState> {
    player: PlayerId,
    config: MctsConfig,
    evaluator: LeafEvaluator<S>,
    rng: StdRng,
    name: String,
    last_visits: Vec<(S::Action, u32)>,
}

impl<S: GameState> MctsPlayer<S> {
    /// Classic MCTS with uniform random rollouts.
    pub fn pure(player: PlayerId, config: MctsConfig) -> Self {
        let name = format!("MCTS(n={})", config.n_playout);
        Self::with_evaluator(player, config, LeafEvaluator::Rollout, name)
    }

    /// AlphaZero-style MCTS: leaves are scored by `evaluation` instead of a rollout.
    pub fn alpha_zero(player: PlayerId, evaluation: EvaluationFn<S>, config: MctsConfig) -> Self {
        let name = format!("AlphaZero(n={})", config.n_playout);
        Self::with_evaluator(player, config, LeafEvaluator::Heuristic(evaluation), name)
    }

    /// [`MctsPlayer::alpha_zero`] with an evaluation function from the registry.
    pub fn alpha_zero_named(
        player: PlayerId,
        evaluation: &str,
        config: MctsConfig,
    ) -> Result<Self, EvalError> {
        let name = format!("AlphaZero(n={}, {evaluation})", config.n_playout);
        let evaluator = LeafEvaluator::Heuristic(get_evaluation_func(evaluation)?);
        Ok(Self::with_evaluator(player, config, evaluator, name))
    }

    fn with_evaluator(
        player: PlayerId,
        config: MctsConfig,
        evaluator: LeafEvaluator<S>,
        name: String,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            player,
            config,
            evaluator,
            rng,
            name,
            last_visits: Vec::new(),
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Root visit counts from the most recent search.
    pub fn root_visits(&self) -> &[(S::Action, u32)] {
        &self.last_visits
    }
}

impl<S> Player<S> for MctsPlayer<S>
where
    S: GameState + Send,
    S::Action: Send,
{
    fn player(&self) -> PlayerId {
        self.player
    }

    fn get_action(&mut self, state: &S) -> SearchResult<S::Action> {
        assert_turn(state, self.player);

        let mut search = MctsSearch::new(state.clone(), &self.config, self.evaluator, &mut self.rng);
        let result = search.run();
        self.last_visits = search.tree().root_visits();

        debug!(
            player = %self.player,
            playouts = self.config.n_playout,
            nodes = result.nodes,
            value = result.value,
            "mcts search done"
        );
        result
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.last_visits.clear();
    }
}
