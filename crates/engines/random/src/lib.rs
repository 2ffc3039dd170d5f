//! Random Move Player
//!
//! Selects actions uniformly at random from all legal actions.
//! Useful for:
//! - Exercising the match runner without paying for search
//! - Baseline comparisons (any real strategy should easily beat this)

use game_core::{assert_turn, GameState, Player, PlayerId, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

#[cfg(test)]
mod lib_tests;

/// A player that picks a random legal action.
///
/// It provides no evaluation: the reported value is always 0 unless the
/// position is already decided.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    player: PlayerId,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible player for tests and seeded tournaments.
    pub fn seeded(player: PlayerId, seed: u64) -> Self {
        Self {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Player<S> for RandomPlayer {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn get_action(&mut self, state: &S) -> SearchResult<S::Action> {
        assert_turn(state, self.player);

        let end = state.game_end();
        if end.is_terminal() {
            return SearchResult::terminal(end, self.player);
        }

        let best_action = state.legal_actions().choose(&mut self.rng).copied();
        trace!(player = %self.player, action = ?best_action, "random pick");

        SearchResult {
            best_action,
            value: 0.0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
