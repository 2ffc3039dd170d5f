//! Tournament CLI
//!
//! Run matches between players, track Elo ratings and score positions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game_core::{get_evaluation_func, GameState, Gomoku, Move};
use tournament::{default_opponents, EloTracker, MatchConfig, MatchRunner, PlayerSpec, TournamentConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tournament", about = "k-in-a-row tournament runner")]
struct Cli {
    /// JSON file holding Elo ratings (overrides the config's `elo_file`)
    #[arg(long, global = true)]
    elo_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match between two players
    Match {
        player1: PlayerSpec,
        player2: PlayerSpec,
        #[command(flatten)]
        settings: MatchArgs,
    },
    /// Play one challenger against a list of opponents
    Gauntlet {
        challenger: PlayerSpec,
        /// Comma-separated opponents (defaults to the config's players, or a built-in list)
        #[arg(long, value_delimiter = ',')]
        opponents: Vec<PlayerSpec>,
        /// Write the tournament results to this JSON file
        #[arg(long)]
        results: Option<PathBuf>,
        #[command(flatten)]
        settings: MatchArgs,
    },
    /// Show the Elo leaderboard
    #[command(alias = "elo")]
    Leaderboard,
    /// Score a position with an evaluation function
    Evaluate {
        /// Evaluation name: dummy, distance or detailed
        evaluation: String,
        /// Moves played from the empty board, as "row,col;row,col"
        #[arg(long, default_value = "")]
        moves: String,
        #[arg(long, default_value_t = 15)]
        board: usize,
        #[arg(long, default_value_t = 5)]
        in_row: usize,
    },
}

/// Overrides on top of the defaults or a TOML config.
#[derive(Args, Debug)]
struct MatchArgs {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    games: Option<u32>,
    /// Side length of the square board
    #[arg(long)]
    board: Option<usize>,
    #[arg(long)]
    in_row: Option<usize>,
    /// Moves before a game is scored as a draw (defaults to the cell count)
    #[arg(long)]
    max_moves: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Do not print a line per game
    #[arg(long, short)]
    quiet: bool,
}

impl MatchArgs {
    fn apply(&self, config: &mut MatchConfig) {
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(board) = self.board {
            config.width = board;
            config.height = board;
        }
        if let Some(in_row) = self.in_row {
            config.n_in_row = in_row;
        }
        if let Some(max_moves) = self.max_moves {
            config.max_moves = Some(max_moves);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.quiet {
            config.verbose = false;
        }
    }

    fn tournament_config(&self) -> Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TournamentConfig::default(),
        };
        self.apply(&mut config.match_config);
        Ok(config)
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_match(
    player1: &PlayerSpec,
    player2: &PlayerSpec,
    settings: &MatchArgs,
    elo_file: Option<&Path>,
) -> Result<()> {
    let TournamentConfig {
        elo_file: config_elo_file,
        match_config: config,
        ..
    } = settings.tournament_config()?;
    let elo_file = elo_file.unwrap_or(&config_elo_file);

    println!("=== Match: {player1} vs {player2} ===");
    println!(
        "Games: {}, Board: {}x{}, {} in a row",
        config.num_games, config.width, config.height, config.n_in_row
    );
    println!();

    let runner = MatchRunner::new(config);
    let result = runner.run_match(player1, player2)?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        player1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load_or_default(elo_file)?;
    tracker.update_ratings(&player1.to_string(), &player2.to_string(), &result);
    tracker.print_leaderboard();
    tracker.save(elo_file)?;
    Ok(())
}

fn run_gauntlet(
    challenger: &PlayerSpec,
    opponents: &[PlayerSpec],
    results_file: Option<&Path>,
    settings: &MatchArgs,
    elo_file: Option<&Path>,
) -> Result<()> {
    let config = settings.tournament_config()?;
    let elo_file = elo_file.unwrap_or(&config.elo_file).to_path_buf();
    let opponents = if !opponents.is_empty() {
        opponents.to_vec()
    } else if !config.players.is_empty() {
        config.players.clone()
    } else {
        default_opponents()
    };

    println!("=== Gauntlet: {challenger} vs all ===");
    let names: Vec<String> = opponents.iter().map(|o| o.to_string()).collect();
    println!("Opponents: {}", names.join(", "));
    println!("Games per match: {}", config.match_config.num_games);

    let mut tracker = EloTracker::load_or_default(&elo_file)?;
    let runner = MatchRunner::new(config.match_config);
    let results = runner.run_gauntlet(challenger, &opponents, &mut tracker)?;

    tracker.print_leaderboard();
    results.print_report();

    tracker.save(&elo_file)?;
    if let Some(path) = results_file {
        results.save(path)?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn show_leaderboard(elo_file: Option<&Path>) -> Result<()> {
    let default_file = TournamentConfig::default().elo_file;
    let elo_file = elo_file.unwrap_or(&default_file);
    if !elo_file.exists() {
        println!("No tournament data found. Run some matches first!");
        return Ok(());
    }
    EloTracker::load(elo_file)?.print_leaderboard();
    Ok(())
}

fn evaluate(name: &str, moves: &str, board: usize, in_row: usize) -> Result<()> {
    let evaluation = get_evaluation_func::<Gomoku>(name)?;
    let moves = moves
        .split(';')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::parse::<Move>)
        .collect::<Result<Vec<_>, _>>()?;
    let state = Gomoku::new(board, board, in_row)?.with_moves(&moves)?;

    println!("{state}");
    for (player, features) in state.info() {
        println!("{player}: {features:?}");
    }
    println!(
        "{} to move, {} evaluation: {:.4}",
        state.current_player(),
        name,
        evaluation(&state)
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match &cli.command {
        Command::Match {
            player1,
            player2,
            settings,
        } => run_match(player1, player2, settings, cli.elo_file.as_deref()),
        Command::Gauntlet {
            challenger,
            opponents,
            results,
            settings,
        } => run_gauntlet(challenger, opponents, results.as_deref(), settings, cli.elo_file.as_deref()),
        Command::Leaderboard => show_leaderboard(cli.elo_file.as_deref()),
        Command::Evaluate {
            evaluation,
            moves,
            board,
            in_row,
        } => evaluate(evaluation, moves, *board, *in_row),
    }
}
