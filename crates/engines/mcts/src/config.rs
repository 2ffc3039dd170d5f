//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Exploration constant `c` of the UCT formula.
    /// Higher values spread visits more evenly across children.
    pub c: f64,

    /// Number of playouts per decision.
    pub n_playout: u32,

    /// Seed for rollout randomness. `None` draws a fresh seed per player.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            c: 5.0,
            n_playout: 2000,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Config for classic MCTS, where cheap random rollouts need many playouts.
    pub fn for_rollout() -> Self {
        Self {
            n_playout: 10_000,
            ..Self::default()
        }
    }

    /// Small, seeded config for tests.
    pub fn for_testing() -> Self {
        Self {
            c: 5.0,
            n_playout: 200,
            seed: Some(42),
        }
    }

    /// Builder pattern: set exploration constant.
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Builder pattern: set number of playouts.
    pub fn with_playouts(mut self, n: u32) -> Self {
        self.n_playout = n;
        self
    }

    /// Builder pattern: set the rollout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.n_playout, 2000);
        assert!((config.c - 5.0).abs() < 1e-12);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_rollout_config_runs_more_playouts() {
        assert!(MctsConfig::for_rollout().n_playout > MctsConfig::default().n_playout);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_playouts(100)
            .with_c(1.5)
            .with_seed(7);

        assert_eq!(config.n_playout, 100);
        assert!((config.c - 1.5).abs() < 1e-12);
        assert_eq!(config.seed, Some(7));
    }
}
