use super::*;

#[test]
fn test_equal_ratings_expect_half() {
    let tracker = EloTracker::new();
    let expected = tracker.expected_score("cutoff:2:detailed", "random");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn test_elo_update_is_zero_sum() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 10,
        losses: 0,
        draws: 0,
    };

    let change = tracker.update_ratings("alphabeta", "random", &result);

    assert!((change - 160.0).abs() < 1e-9);
    assert!(tracker.rating("alphabeta") > DEFAULT_ELO);
    assert!(tracker.rating("random") < DEFAULT_ELO);
    let total = tracker.rating("alphabeta") + tracker.rating("random");
    assert!((total - 2.0 * DEFAULT_ELO).abs() < 1e-9);
    assert_eq!(tracker.games_played["random"], 10);
    assert_eq!(tracker.history.len(), 1);
}

#[test]
fn test_drawn_match_between_equals_changes_nothing() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 1,
        losses: 1,
        draws: 2,
    };
    assert_eq!(result.score(), 0.5);

    let change = tracker.update_ratings("a", "b", &result);
    assert_eq!(change, 0.0);
}

#[test]
fn test_match_result_records_games() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Loss.flipped());
    result.record(GameResult::Draw);

    assert_eq!(result.wins, 2);
    assert_eq!(result.draws, 1);
    assert_eq!(result.total_games(), 3);
    assert_eq!(MatchResult::new().score(), 0.5);
}

#[test]
fn test_leaderboard_order() {
    let mut tracker = EloTracker::new();
    tracker.update_ratings(
        "mcts:100",
        "random",
        &MatchResult {
            wins: 3,
            losses: 1,
            draws: 0,
        },
    );

    let board = tracker.leaderboard();
    assert_eq!(board[0].0, "mcts:100");
    assert_eq!(board[1].0, "random");
    assert!(tracker.format_leaderboard().contains("mcts:100"));
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("elo_tracker_test_{}.json", std::process::id()));
    let mut tracker = EloTracker::new();
    tracker.update_ratings(
        "a",
        "b",
        &MatchResult {
            wins: 1,
            losses: 0,
            draws: 0,
        },
    );

    tracker.save(&path).unwrap();
    let loaded = EloTracker::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.rating("a"), tracker.rating("a"));
    assert_eq!(loaded.history[0].result, tracker.history[0].result);
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("elo_tracker_test_does_not_exist.json");
    assert!(matches!(EloTracker::load(&path), Err(TournamentError::Io { .. })));
    assert!(EloTracker::load_or_default(&path).unwrap().ratings.is_empty());
}
