//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::config::MatchConfig;
use crate::elo::MatchResult;
use crate::error::{Result, TournamentError};

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    pub participants: Vec<String>,
    /// Every match played, in order
    pub matches: Vec<MatchEntry>,
    /// Settings every match was played with
    pub config: MatchConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub player1: String,
    pub player2: String,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, player1: &str, player2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            player1: player1.to_string(),
            player2: player2.to_string(),
            result,
        });
    }

    /// Points per participant (1 per win, 0.5 per draw), best first.
    pub fn standings(&self) -> Vec<(String, f64)> {
        let mut points: BTreeMap<&str, f64> = self
            .participants
            .iter()
            .map(|name| (name.as_str(), 0.0))
            .collect();

        for entry in &self.matches {
            let r = &entry.result;
            let draws = 0.5 * r.draws as f64;
            *points.entry(entry.player1.as_str()).or_insert(0.0) += r.wins as f64 + draws;
            *points.entry(entry.player2.as_str()).or_insert(0.0) += r.losses as f64 + draws;
        }

        let mut standings: Vec<_> = points
            .into_iter()
            .map(|(name, score)| (name.to_string(), score))
            .collect();
        standings.sort_by(|a, b| b.1.total_cmp(&a.1));
        standings
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Tournament: {} ===\n", self.name);
        let _ = writeln!(report, "Participants: {}", self.participants.join(", "));
        let _ = writeln!(
            report,
            "Config: {} games/match, {}x{} board, {} in a row\n",
            self.config.num_games, self.config.width, self.config.height, self.config.n_in_row
        );

        let _ = writeln!(report, "Results:");
        let _ = writeln!(
            report,
            "{:<24} vs {:<24} {:>5}-{:<5}-{:<5}",
            "Player 1", "Player 2", "W", "L", "D"
        );
        let _ = writeln!(report, "{}", "-".repeat(70));
        for entry in &self.matches {
            let _ = writeln!(
                report,
                "{:<24} vs {:<24} {:>5}-{:<5}-{:<5}",
                entry.player1, entry.player2, entry.result.wins, entry.result.losses, entry.result.draws
            );
        }

        let _ = writeln!(report, "\nStandings:");
        for (rank, (name, points)) in self.standings().into_iter().enumerate() {
            let _ = writeln!(report, "{:>3}. {:<24} {:>6.1}", rank + 1, name, points);
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
