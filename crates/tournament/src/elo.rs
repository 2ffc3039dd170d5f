//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{Result, TournamentError};

/// Default starting Elo for new players
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Elo ratings keyed by player spec string, persisted as JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub ratings: HashMap<String, f64>,
    pub games_played: HashMap<String, u32>,
    /// Match history for analysis
    pub history: Vec<MatchRecord>,
}

/// Record of a single rated match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player1: String,
    pub player2: String,
    pub result: MatchResult,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    pub elo_change: f64,
}

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side of the board.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), from the first player's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from player1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tracker from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load tracker from a JSON file, starting empty if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Rating of `player`, or the default for someone unrated
    pub fn rating(&self, player: &str) -> f64 {
        self.ratings.get(player).copied().unwrap_or(DEFAULT_ELO)
    }

    /// Calculate expected score for player1 against player2
    pub fn expected_score(&self, player1: &str, player2: &str) -> f64 {
        let r1 = self.rating(player1);
        let r2 = self.rating(player2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update ratings after a match and return player1's rating change
    pub fn update_ratings(&mut self, player1: &str, player2: &str, result: &MatchResult) -> f64 {
        let expected = self.expected_score(player1, player2);
        let actual = result.score();

        let games = result.total_games() as f64;
        let elo_change = K_FACTOR * games * (actual - expected);

        let r1 = self.rating(player1);
        let r2 = self.rating(player2);
        self.ratings.insert(player1.to_string(), r1 + elo_change);
        self.ratings.insert(player2.to_string(), r2 - elo_change);

        *self.games_played.entry(player1.to_string()).or_insert(0) += result.total_games();
        *self.games_played.entry(player2.to_string()).or_insert(0) += result.total_games();

        self.history.push(MatchRecord {
            player1: player1.to_string(),
            player2: player2.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change,
        });
        elo_change
    }

    /// Players sorted by rating, best first. Equal ratings sort by name.
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    pub fn format_leaderboard(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Leaderboard ===");
        let _ = writeln!(out, "{:<30} {:>8} {:>8}", "Player", "Elo", "Games");
        let _ = writeln!(out, "{}", "-".repeat(48));
        for (name, rating, games) in self.leaderboard() {
            let _ = writeln!(out, "{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        out
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n{}", self.format_leaderboard());
    }
}

fn unix_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
