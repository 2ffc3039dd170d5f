//! MCTS tree structure with arena allocation.
//!
//! Nodes live in a contiguous Vec and refer to each other by [`NodeId`].
//! The tree owns every node; it is rebuilt for each decision.

use game_core::{GameState, PlayerId};

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug, Clone)]
pub struct MctsTree<S: GameState> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S>>,
}

impl<S: GameState> MctsTree<S> {
    /// Create a tree holding only the root state.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child of `node_id` with the highest UCT score, first one on ties.
    pub fn select_child(&self, node_id: NodeId, c: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let ln_parent_visits = (node.visits.max(1) as f64).ln();

        let mut best: Option<(NodeId, f64)> = None;
        for &(_, child_id) in &node.children {
            let score = self.get(child_id).ucb_score(ln_parent_visits, c);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child_id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Add a child reached by `owner` playing `action` from `parent_id`.
    pub fn add_child(
        &mut self,
        parent_id: NodeId,
        action: S::Action,
        owner: PlayerId,
        state: S,
    ) -> NodeId {
        let child_id = NodeId(self.nodes.len() as u32);
        self.nodes
            .push(MctsNode::new_child(parent_id, action, owner, state));
        self.get_mut(parent_id).children.push((action, child_id));
        child_id
    }

    /// Backpropagate a value from a leaf to the root.
    ///
    /// `value` is from the leaf owner's perspective. Nodes owned by another
    /// player receive the negated value.
    pub fn backpropagate(&mut self, leaf_id: NodeId, value: f64) {
        let leaf_owner = self.get(leaf_id).owner;
        let mut current = Some(leaf_id);

        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            if let (Some(owner), Some(leaf_owner)) = (node.owner, leaf_owner) {
                node.value_sum += if owner == leaf_owner { value } else { -value };
            }
            current = node.parent;
        }
    }

    /// Root child with the most visits, first one on ties.
    /// Returns (action, visit_count) or None if root has no children.
    pub fn best_action(&self) -> Option<(S::Action, u32)> {
        let mut best: Option<(S::Action, u32)> = None;
        for (action, visits) in self.root_visits() {
            if best.map_or(true, |(_, most)| visits > most) {
                best = Some((action, visits));
            }
        }
        best
    }

    /// Visit counts of the root's children, in expansion order.
    pub fn root_visits(&self) -> Vec<(S::Action, u32)> {
        self.get(self.root())
            .children
            .iter()
            .map(|&(action, id)| (action, self.get(id).visits))
            .collect()
    }

    /// Root child reached by `action`, if it was expanded.
    pub fn root_child(&self, action: S::Action) -> Option<&MctsNode<S>> {
        self.get(self.root())
            .children
            .iter()
            .find(|(a, _)| *a == action)
            .map(|&(_, id)| self.get(id))
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
