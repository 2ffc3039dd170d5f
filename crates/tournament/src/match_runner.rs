//! Match runner for playing games between players

use game_core::gomoku::{FIRST, SECOND};
use game_core::{GameEnd, GameState, Gomoku, Player, PlayerId};
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::elo::{EloTracker, GameResult, MatchResult};
use crate::error::{Result, TournamentError};
use crate::results::TournamentResults;
use crate::roster::PlayerSpec;

/// Finished game, from the point of view of the player who moved first.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub result: GameResult,
    pub moves: Vec<game_core::Move>,
    pub final_state: Gomoku,
}

/// Runs matches between two player specs
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two players
    ///
    /// Fresh players are built for every game so no search state leaks
    /// between games. Returns the result from `spec1`'s perspective.
    pub fn run_match(&self, spec1: &PlayerSpec, spec2: &PlayerSpec) -> Result<MatchResult> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let spec1_first = !self.config.alternate_seats || game_num % 2 == 0;
            let (first_spec, second_spec) = if spec1_first {
                (spec1, spec2)
            } else {
                (spec2, spec1)
            };

            let seed = self.config.seed.map(|s| s.wrapping_add(2 * u64::from(game_num)));
            let mut first = first_spec.build_seeded(FIRST, seed)?;
            let mut second = second_spec.build_seeded(SECOND, seed.map(|s| s.wrapping_add(1)))?;

            let record = self.play_game(first.as_mut(), second.as_mut())?;
            let game_result = if spec1_first {
                record.result
            } else {
                record.result.flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                first = %first_spec,
                second = %second_spec,
                result = ?record.result,
                moves = record.moves.len(),
                "game finished"
            );
            if self.config.verbose {
                let seat = if spec1_first { "1st" } else { "2nd" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    seat,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game on a fresh board
    ///
    /// Exceeding the move limit ends the game as a draw.
    pub fn play_game(
        &self,
        first: &mut dyn Player<Gomoku>,
        second: &mut dyn Player<Gomoku>,
    ) -> Result<GameRecord> {
        let mut state = self.config.new_game()?;
        let mut moves = Vec::new();
        let move_limit = self.config.move_limit();
        first.new_game();
        second.new_game();

        while !state.game_end().is_terminal() {
            if moves.len() >= move_limit {
                debug!(move_limit, "move limit reached");
                break;
            }

            let (search, name) = if state.current_player() == first.player() {
                (first.get_action(&state), first.name())
            } else {
                (second.get_action(&state), second.name())
            };
            let Some(mv) = search.best_action else {
                return Err(TournamentError::NoMove {
                    player: name.to_string(),
                });
            };
            debug!(player = name, mv = %mv, value = search.value, nodes = search.nodes, "move");

            state = state.try_apply(mv)?;
            moves.push(mv);
        }

        Ok(GameRecord {
            result: result_for(state.game_end(), FIRST),
            moves,
            final_state: state,
        })
    }
}

impl MatchRunner {
    /// Plays `challenger` against each opponent in turn, rating every match.
    pub fn run_gauntlet(
        &self,
        challenger: &PlayerSpec,
        opponents: &[PlayerSpec],
        tracker: &mut EloTracker,
    ) -> Result<TournamentResults> {
        let challenger_name = challenger.to_string();
        let mut results = TournamentResults::new(
            &format!("Gauntlet: {challenger_name}"),
            std::iter::once(challenger_name.clone())
                .chain(opponents.iter().map(|s| s.to_string()))
                .collect(),
            self.config.clone(),
        );

        for opponent in opponents {
            let opponent_name = opponent.to_string();
            info!(challenger = %challenger_name, opponent = %opponent_name, "starting match");

            let result = self.run_match(challenger, opponent)?;
            let change = tracker.update_ratings(&challenger_name, &opponent_name, &result);
            info!(
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                elo_change = change,
                "match finished"
            );
            results.add_match(&challenger_name, &opponent_name, result);
        }

        Ok(results)
    }
}

fn result_for(end: GameEnd, player: PlayerId) -> GameResult {
    match end {
        GameEnd::Winner(winner) if winner == player => GameResult::Win,
        GameEnd::Winner(_) => GameResult::Loss,
        GameEnd::Draw | GameEnd::Ongoing => GameResult::Draw,
    }
}

/// Quick utility to run a match with the default config
pub fn quick_match(spec1: &PlayerSpec, spec2: &PlayerSpec, num_games: u32) -> Result<MatchResult> {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(spec1, spec2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
