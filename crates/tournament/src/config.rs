//! Match and tournament configuration, loadable from TOML.
//!
//! ```toml
//! name = "evening gauntlet"
//! players = ["cutoff:2:detailed", "alphazero:detailed:500", "random"]
//!
//! [match]
//! width = 9
//! height = 9
//! n_in_row = 5
//! num_games = 6
//! ```

use std::path::{Path, PathBuf};

use game_core::Gomoku;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::roster::PlayerSpec;

/// Configuration for a match between two players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board width
    pub width: usize,
    /// Board height
    pub height: usize,
    /// Stones in a row needed to win
    pub n_in_row: usize,
    /// Number of games to play
    pub num_games: u32,
    /// Maximum moves per game before declaring a draw; `None` allows one
    /// move per cell
    pub max_moves: Option<u32>,
    /// Whether the first player alternates seats each game
    pub alternate_seats: bool,
    /// Print a line per finished game
    pub verbose: bool,
    /// Base seed for randomised players; `None` draws fresh randomness
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            n_in_row: 5,
            num_games: 10,
            max_moves: None,
            alternate_seats: true,
            verbose: true,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Empty board with the configured geometry.
    pub fn new_game(&self) -> Result<Gomoku> {
        Ok(Gomoku::new(self.width, self.height, self.n_in_row)?)
    }

    /// Moves a game may last before it is scored as a draw.
    pub fn move_limit(&self) -> usize {
        self.max_moves
            .map_or(self.width * self.height, |limit| limit as usize)
    }

    /// Parses a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

/// Configuration for a round-robin or gauntlet run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    /// Participants; a gauntlet's challenger plays each of them
    pub players: Vec<PlayerSpec>,
    /// Where Elo ratings are persisted
    pub elo_file: PathBuf,
    /// Settings shared by every match
    #[serde(rename = "match")]
    pub match_config: MatchConfig,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "tournament".to_string(),
            players: Vec::new(),
            elo_file: PathBuf::from("tournament_elo.json"),
            match_config: MatchConfig::default(),
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}
