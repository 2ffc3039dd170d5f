//! Error types shared by the game core.

use thiserror::Error;

/// Evaluation registry failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown evaluation function '{0}'")]
    UnknownEvaluation(String),
}

/// Rule violations reported by the reference games.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board {width}x{height} with {n_in_row} in a row")]
    InvalidBoard {
        width: usize,
        height: usize,
        n_in_row: usize,
    },

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("game is already over")]
    GameOver,

    #[error("cannot parse move '{0}' (expected 'row,col')")]
    ParseMove(String),
}
