//! Leaf evaluation for newly expanded nodes.
//!
//! Classic MCTS estimates a leaf by playing random moves to the end of the
//! game. The AlphaZero-style variant replaces that rollout with a single call
//! to an evaluation function.

use game_core::{EvaluationFn, GameState};
use rand::seq::SliceRandom;
use rand::Rng;

/// How a freshly expanded leaf is valued.
pub enum LeafEvaluator<S: GameState> {
    /// Uniform random playout to a terminal state.
    Rollout,
    /// One heuristic call; exact outcome if the leaf is already terminal.
    Heuristic(EvaluationFn<S>),
}

impl<S: GameState> Clone for LeafEvaluator<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: GameState> Copy for LeafEvaluator<S> {}

impl<S: GameState> std::fmt::Debug for LeafEvaluator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeafEvaluator::Rollout => f.write_str("Rollout"),
            LeafEvaluator::Heuristic(_) => f.write_str("Heuristic"),
        }
    }
}

impl<S: GameState> LeafEvaluator<S> {
    /// Value of `state` for the player to move in it, in [-1, 1].
    ///
    /// Terminal states score exactly: +1 win, 0 draw, -1 loss.
    pub fn leaf_value<R: Rng>(&self, state: &S, rng: &mut R) -> f64 {
        let mover = state.current_player();
        if let Some(value) = state.game_end().value_for(mover) {
            return value;
        }

        match self {
            LeafEvaluator::Heuristic(evaluation) => evaluation(state),
            LeafEvaluator::Rollout => {
                let mut current = state.clone();
                loop {
                    if let Some(value) = current.game_end().value_for(mover) {
                        return value;
                    }
                    let actions = current.legal_actions();
                    match actions.choose(rng) {
                        Some(&action) => current = current.apply(action),
                        None => return 0.0, // Stuck without a result counts as a draw
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::gomoku::{FIRST, SECOND};
    use game_core::{dummy_evaluation, GameEnd, GameTree, Gomoku, Move, TreeState};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_terminal_leaf_is_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tree = GameTree::new();
        let lost = tree.leaf(SECOND, GameEnd::Winner(FIRST));
        let state = tree.into_state(lost);

        let heuristic: LeafEvaluator<TreeState> = LeafEvaluator::Heuristic(|_| 0.5);
        assert_eq!(heuristic.leaf_value(&state, &mut rng), -1.0);
        assert_eq!(LeafEvaluator::Rollout.leaf_value(&state, &mut rng), -1.0);
    }

    #[test]
    fn test_heuristic_leaf_uses_evaluation() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = Gomoku::tictactoe().apply(Move::new(1, 1));

        let evaluator: LeafEvaluator<Gomoku> = LeafEvaluator::Heuristic(dummy_evaluation::<Gomoku>);
        assert_eq!(evaluator.leaf_value(&game, &mut rng), 0.0);
    }

    #[test]
    fn test_rollout_reaches_an_outcome() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = Gomoku::tictactoe();

        for _ in 0..50 {
            let value = LeafEvaluator::Rollout.leaf_value(&game, &mut rng);
            assert!(value == -1.0 || value == 0.0 || value == 1.0);
        }
    }

    #[test]
    fn test_rollout_sees_forced_result() {
        // The only line of play ends in a win for the mover
        let mut rng = StdRng::seed_from_u64(3);
        let mut tree = GameTree::new();
        let win = tree.leaf(SECOND, GameEnd::Winner(FIRST));
        let root = tree.decision(FIRST, vec![win]);
        let state = tree.into_state(root);

        assert_eq!(LeafEvaluator::Rollout.leaf_value(&state, &mut rng), 1.0);
    }
}
