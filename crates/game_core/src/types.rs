use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// Opaque seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Terminal status of a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    Ongoing,
    Draw,
    Winner(PlayerId),
}

impl GameEnd {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameEnd::Ongoing)
    }

    /// Exact outcome value from `player`'s perspective: +1 win, 0 draw, -1 loss.
    ///
    /// Returns `None` while the game is still running.
    pub fn value_for(self, player: PlayerId) -> Option<f64> {
        match self {
            GameEnd::Ongoing => None,
            GameEnd::Draw => Some(0.0),
            GameEnd::Winner(w) if w == player => Some(1.0),
            GameEnd::Winner(_) => Some(-1.0),
        }
    }
}

/// Structural features of one player's position, read by evaluation functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerFeatures {
    /// Stones still missing in the player's most advanced winning window
    pub max_distance: f64,
    pub live_four: u32,
    pub four: u32,
    pub live_three: u32,
    pub three: u32,
    pub live_two: u32,
}

/// Per-player features, ordered by player id.
pub type GameInfo = BTreeMap<PlayerId, PlayerFeatures>;

/// A deterministic turn-based game position.
///
/// Transitions are non-destructive: [`GameState::apply`] returns the successor
/// and leaves `self` untouched, so search branches never share mutable state.
pub trait GameState: Clone {
    type Action: Copy + Eq + Hash + fmt::Debug;

    /// The player whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// Whether the game is over, and who won.
    fn game_end(&self) -> GameEnd;

    /// Legal actions in a stable order. The order decides tie-breaks and
    /// pruning efficiency, never the value of an exhaustive search.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Returns the state reached by playing `action`.
    fn apply(&self, action: Self::Action) -> Self;

    /// Per-player features for evaluation functions.
    fn info(&self) -> GameInfo {
        GameInfo::new()
    }
}
