//! Error type for the tournament library

use std::path::PathBuf;

use game_core::{EvalError, GameError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("unknown player kind `{0}` (expected random, minimax, alphabeta, cutoff, mcts or alphazero)")]
    UnknownPlayer(String),

    #[error("invalid player spec `{spec}`: {reason}")]
    InvalidSpec { spec: String, reason: String },

    #[error("{player} returned no move in an unfinished game")]
    NoMove { player: String },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TournamentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = TournamentError> = std::result::Result<T, E>;
