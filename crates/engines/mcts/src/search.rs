//! The playout loop: selection, expansion, leaf evaluation, backpropagation.

use game_core::{GameState, SearchResult};
use rand::Rng;
use tracing::trace;

use crate::config::MctsConfig;
use crate::evaluator::LeafEvaluator;
use crate::node::NodeId;
use crate::tree::MctsTree;

/// One decision's worth of search over a freshly built tree.
pub struct MctsSearch<'a, S: GameState, R: Rng> {
    tree: MctsTree<S>,
    config: &'a MctsConfig,
    evaluator: LeafEvaluator<S>,
    rng: &'a mut R,
}

impl<'a, S: GameState, R: Rng> MctsSearch<'a, S, R> {
    pub fn new(root: S, config: &'a MctsConfig, evaluator: LeafEvaluator<S>, rng: &'a mut R) -> Self {
        Self {
            tree: MctsTree::new(root),
            config,
            evaluator,
            rng,
        }
    }

    /// Runs `n_playout` playouts and picks the most visited root action.
    ///
    /// The reported value is the chosen child's mean value, which is stored
    /// from the root player's perspective.
    pub fn run(&mut self) -> SearchResult<S::Action> {
        let root = self.tree.get(self.tree.root());
        if root.is_terminal() {
            return SearchResult::terminal(root.end, root.state.current_player());
        }

        for playout in 0..self.config.n_playout {
            self.playout();
            trace!(playout, nodes = self.tree.len(), "playout done");
        }

        let best = self.tree.best_action();
        let value = best
            .and_then(|(action, _)| self.tree.root_child(action))
            .map_or(0.0, |child| child.mean_value());

        SearchResult {
            best_action: best.map(|(action, _)| action),
            value,
            nodes: self.tree.len() as u64,
        }
    }

    /// A single selection-expansion-evaluation-backup pass.
    pub fn playout(&mut self) {
        let mut id = self.tree.root();
        loop {
            let node = self.tree.get(id);
            if node.is_terminal() || !node.is_fully_expanded() {
                break;
            }
            match self.tree.select_child(id, self.config.c) {
                Some(child) => id = child,
                None => break,
            }
        }

        let node = self.tree.get(id);
        if node.is_terminal() {
            let value = node
                .owner
                .and_then(|owner| node.end.value_for(owner))
                .unwrap_or(0.0);
            self.tree.backpropagate(id, value);
            return;
        }

        let Some(&action) = node.untried.last() else {
            // Non-terminal with no legal actions: score as a draw
            self.tree.backpropagate(id, 0.0);
            return;
        };
        let mover = node.state.current_player();
        let child_state = node.state.apply(action);
        self.tree.get_mut(id).untried.pop();

        let leaf = self.evaluator.leaf_value(&child_state, &mut *self.rng);
        let value = if child_state.current_player() == mover {
            leaf
        } else {
            -leaf
        };

        let child = self.tree.add_child(id, action, mover, child_state);
        self.tree.backpropagate(child, value);
    }

    pub fn tree(&self) -> &MctsTree<S> {
        &self.tree
    }

    pub fn into_tree(self) -> MctsTree<S> {
        self.tree
    }
}

/// Builds a tree from `root` and runs a full search on it.
pub fn run_mcts<S: GameState, R: Rng>(
    root: &S,
    config: &MctsConfig,
    evaluator: LeafEvaluator<S>,
    rng: &mut R,
) -> SearchResult<S::Action> {
    MctsSearch::new(root.clone(), config, evaluator, rng).run()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
