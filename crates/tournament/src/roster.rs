//! Player specifications: the `kind[:arg[:arg]]` strings used on the command
//! line and in tournament configs, and the players they build.

use std::fmt;
use std::str::FromStr;

use game_core::{get_evaluation_func, Gomoku, Player, PlayerId};
use mcts_engine::{MctsConfig, MctsPlayer};
use minimax_engine::{AlphaBetaPlayer, CuttingOffAlphaBetaPlayer, MinimaxPlayer};
use random_engine::RandomPlayer;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};

/// Depth used by `cutoff` when none is given.
pub const DEFAULT_CUTOFF_DEPTH: u32 = 2;

/// Evaluation used by `cutoff` and `alphazero` when none is given.
pub const DEFAULT_EVALUATION: &str = "detailed";

/// A player kind plus its parameters.
///
/// | spec                            | player                          |
/// |---------------------------------|---------------------------------|
/// | `random`                        | uniform random moves            |
/// | `minimax`                       | exhaustive minimax              |
/// | `alphabeta`                     | exhaustive alpha-beta           |
/// | `cutoff[:depth[:eval]]`         | depth-limited alpha-beta        |
/// | `mcts[:playouts]`               | MCTS with random rollouts       |
/// | `alphazero[:eval[:playouts]]`   | MCTS with heuristic leaves      |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerSpec {
    Random,
    Minimax,
    AlphaBeta,
    Cutoff { depth: u32, evaluation: String },
    Mcts { playouts: u32 },
    AlphaZero { evaluation: String, playouts: u32 },
}

/// Playouts for `alphazero` when none are given.
fn default_playouts() -> u32 {
    MctsConfig::default().n_playout
}

/// Playouts for `mcts` when none are given. Rollouts are cheap, so more of them.
fn default_rollout_playouts() -> u32 {
    MctsConfig::for_rollout().n_playout
}

impl PlayerSpec {
    /// Builds a player for `player`'s seat with fresh randomness.
    pub fn build(&self, player: PlayerId) -> Result<Box<dyn Player<Gomoku>>> {
        self.build_seeded(player, None)
    }

    /// Builds a player for `player`'s seat. Randomised players use `seed`
    /// when given.
    pub fn build_seeded(
        &self,
        player: PlayerId,
        seed: Option<u64>,
    ) -> Result<Box<dyn Player<Gomoku>>> {
        let mcts_config = |base: MctsConfig, playouts: u32| {
            let config = base.with_playouts(playouts);
            match seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            }
        };

        let built: Box<dyn Player<Gomoku>> = match self {
            PlayerSpec::Random => match seed {
                Some(seed) => Box::new(RandomPlayer::seeded(player, seed)),
                None => Box::new(RandomPlayer::new(player)),
            },
            PlayerSpec::Minimax => Box::new(MinimaxPlayer::new(player)),
            PlayerSpec::AlphaBeta => Box::new(AlphaBetaPlayer::new(player)),
            PlayerSpec::Cutoff { depth, evaluation } => Box::new(
                CuttingOffAlphaBetaPlayer::<Gomoku>::with_evaluation_name(player, *depth, evaluation)?,
            ),
            PlayerSpec::Mcts { playouts } => Box::new(MctsPlayer::<Gomoku>::pure(
                player,
                mcts_config(MctsConfig::for_rollout(), *playouts),
            )),
            PlayerSpec::AlphaZero {
                evaluation,
                playouts,
            } => Box::new(MctsPlayer::<Gomoku>::alpha_zero_named(
                player,
                evaluation,
                mcts_config(MctsConfig::default(), *playouts),
            )?),
        };
        Ok(built)
    }

    /// True for the searches that always play to the end of the game.
    pub fn is_exhaustive(&self) -> bool {
        matches!(self, PlayerSpec::Minimax | PlayerSpec::AlphaBeta)
    }
}

impl fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSpec::Random => f.write_str("random"),
            PlayerSpec::Minimax => f.write_str("minimax"),
            PlayerSpec::AlphaBeta => f.write_str("alphabeta"),
            PlayerSpec::Cutoff { depth, evaluation } => write!(f, "cutoff:{depth}:{evaluation}"),
            PlayerSpec::Mcts { playouts } => write!(f, "mcts:{playouts}"),
            PlayerSpec::AlphaZero {
                evaluation,
                playouts,
            } => write!(f, "alphazero:{evaluation}:{playouts}"),
        }
    }
}

impl FromStr for PlayerSpec {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        let invalid = |reason: &str| TournamentError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = spec.split(':');
        let kind = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let max_args = match kind.as_str() {
            "random" | "minimax" | "alphabeta" | "alpha-beta" => 0,
            "cutoff" | "alphazero" => 2,
            "mcts" => 1,
            _ => return Err(TournamentError::UnknownPlayer(kind)),
        };
        if args.len() > max_args {
            return Err(invalid("too many arguments"));
        }

        let number = |text: &str, what: &str| -> Result<u32> {
            text.parse()
                .map_err(|_| invalid(&format!("{what} must be a non-negative integer")))
        };
        let evaluation = |name: Option<&&str>| -> Result<String> {
            let name = name.copied().unwrap_or(DEFAULT_EVALUATION);
            get_evaluation_func::<Gomoku>(name)?;
            Ok(name.to_string())
        };

        let parsed = match kind.as_str() {
            "random" => PlayerSpec::Random,
            "minimax" => PlayerSpec::Minimax,
            "alphabeta" | "alpha-beta" => PlayerSpec::AlphaBeta,
            "cutoff" => {
                let depth = match args.first() {
                    Some(&text) => number(text, "depth")?,
                    None => DEFAULT_CUTOFF_DEPTH,
                };
                if depth == 0 {
                    return Err(invalid("depth must be at least 1"));
                }
                PlayerSpec::Cutoff {
                    depth,
                    evaluation: evaluation(args.get(1))?,
                }
            }
            "mcts" => PlayerSpec::Mcts {
                playouts: match args.first() {
                    Some(&text) => number(text, "playouts")?,
                    None => default_rollout_playouts(),
                },
            },
            _ => PlayerSpec::AlphaZero {
                evaluation: evaluation(args.first())?,
                playouts: match args.get(1) {
                    Some(&text) => number(text, "playouts")?,
                    None => default_playouts(),
                },
            },
        };

        if let PlayerSpec::Mcts { playouts: 0 } | PlayerSpec::AlphaZero { playouts: 0, .. } = parsed {
            return Err(invalid("playouts must be at least 1"));
        }
        Ok(parsed)
    }
}

impl TryFrom<String> for PlayerSpec {
    type Error = TournamentError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PlayerSpec> for String {
    fn from(spec: PlayerSpec) -> Self {
        spec.to_string()
    }
}

/// Opponents for a gauntlet when none are configured.
pub fn default_opponents() -> Vec<PlayerSpec> {
    vec![
        PlayerSpec::Random,
        PlayerSpec::Cutoff {
            depth: DEFAULT_CUTOFF_DEPTH,
            evaluation: DEFAULT_EVALUATION.to_string(),
        },
        PlayerSpec::AlphaZero {
            evaluation: DEFAULT_EVALUATION.to_string(),
            playouts: default_playouts(),
        },
    ]
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
