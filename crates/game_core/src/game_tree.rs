//! Explicit game trees.
//!
//! Handy for exercising search strategies on hand-crafted positions where the
//! expected values, tie-breaks and pruning points are known in advance.

use std::sync::Arc;

use crate::{GameEnd, GameState, PlayerId};

/// Index of a node inside a [`GameTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeNodeId(pub usize);

#[derive(Debug, Clone)]
struct TreeNode {
    mover: PlayerId,
    end: GameEnd,
    children: Vec<TreeNodeId>,
    heuristic: f64,
}

/// Arena of decision and leaf nodes, built bottom-up.
#[derive(Debug, Clone, Default)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
}

impl GameTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished position where `mover` would be next to play.
    pub fn leaf(&mut self, mover: PlayerId, end: GameEnd) -> TreeNodeId {
        self.push(TreeNode {
            mover,
            end,
            children: Vec::new(),
            heuristic: 0.0,
        })
    }

    /// Adds a position where `mover` picks one of `children`, in order.
    ///
    /// A decision without children is scored as a draw.
    pub fn decision(&mut self, mover: PlayerId, children: Vec<TreeNodeId>) -> TreeNodeId {
        let end = if children.is_empty() {
            GameEnd::Draw
        } else {
            GameEnd::Ongoing
        };
        self.push(TreeNode {
            mover,
            end,
            children,
            heuristic: 0.0,
        })
    }

    /// Attaches a static score (mover's perspective) returned by [`TreeState::heuristic`].
    pub fn set_heuristic(&mut self, id: TreeNodeId, score: f64) {
        self.nodes[id.0].heuristic = score;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freezes the tree and returns the state at `root`.
    pub fn into_state(self, root: TreeNodeId) -> TreeState {
        TreeState {
            tree: Arc::new(self),
            node: root,
        }
    }

    fn push(&mut self, node: TreeNode) -> TreeNodeId {
        self.nodes.push(node);
        TreeNodeId(self.nodes.len() - 1)
    }
}

/// Position inside a shared [`GameTree`]. Actions are child indices.
#[derive(Debug, Clone)]
pub struct TreeState {
    tree: Arc<GameTree>,
    node: TreeNodeId,
}

impl TreeState {
    pub fn node(&self) -> TreeNodeId {
        self.node
    }

    /// Static score attached with [`GameTree::set_heuristic`].
    pub fn heuristic(&self) -> f64 {
        self.current().heuristic
    }

    fn current(&self) -> &TreeNode {
        &self.tree.nodes[self.node.0]
    }
}

impl PartialEq for TreeState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.node == other.node
    }
}

impl GameState for TreeState {
    type Action = usize;

    fn current_player(&self) -> PlayerId {
        self.current().mover
    }

    fn game_end(&self) -> GameEnd {
        self.current().end
    }

    fn legal_actions(&self) -> Vec<usize> {
        (0..self.current().children.len()).collect()
    }

    fn apply(&self, action: usize) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            node: self.current().children[action],
        }
    }
}
