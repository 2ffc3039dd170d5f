//! MCTS tree node representation.
//!
//! Each node owns a snapshot of the state reached by its action. Values are
//! stored from the perspective of the player who made that action (the
//! node's `owner`), so a parent picks the child with the best stored value.

use game_core::{GameEnd, GameState, PlayerId};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S: GameState> {
    /// Parent node index (None for root)
    pub parent: Option<NodeId>,

    /// Action that led to this node from parent
    pub action: Option<S::Action>,

    /// Game state at this node
    pub state: S,

    /// Player who played `action` (None for root)
    pub owner: Option<PlayerId>,

    /// Terminal status of `state`
    pub end: GameEnd,

    /// Expanded children, in expansion order
    pub children: Vec<(S::Action, NodeId)>,

    /// Legal actions not expanded yet. Popped from the back, so they are
    /// stored reversed to expand in enumeration order.
    pub untried: Vec<S::Action>,

    /// Number of playouts through this node
    pub visits: u32,

    /// Sum of backed-up values, from `owner`'s perspective
    pub value_sum: f64,
}

impl<S: GameState> MctsNode<S> {
    /// Create a new root node.
    pub fn new_root(state: S) -> Self {
        Self::new(None, None, None, state)
    }

    /// Create a child reached by `owner` playing `action`.
    pub fn new_child(parent: NodeId, action: S::Action, owner: PlayerId, state: S) -> Self {
        Self::new(Some(parent), Some(action), Some(owner), state)
    }

    fn new(
        parent: Option<NodeId>,
        action: Option<S::Action>,
        owner: Option<PlayerId>,
        state: S,
    ) -> Self {
        let end = state.game_end();
        let mut untried = if end.is_terminal() {
            Vec::new()
        } else {
            state.legal_actions()
        };
        untried.reverse();

        Self {
            parent,
            action,
            state,
            owner,
            end,
            children: Vec::new(),
            untried,
            visits: 0,
            value_sum: 0.0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.end.is_terminal()
    }

    /// True once every legal action has a child.
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Mean backed-up value from the owner's perspective.
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f64
        }
    }

    /// UCT score: `Q + c * sqrt(ln(N) / n)`.
    ///
    /// `ln_parent_visits` is computed once per selection by the caller.
    #[inline]
    pub fn ucb_score(&self, ln_parent_visits: f64, c: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = self.visits as f64;
        self.mean_value() + c * (ln_parent_visits / n).sqrt()
    }
}
