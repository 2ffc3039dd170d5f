//! Named evaluation functions.
//!
//! Every evaluation returns a score in [-1, 1] from the perspective of the
//! player to move in the evaluated state. Callers that need another player's
//! view negate the score.

use crate::{EvalError, GameState, PlayerFeatures};

/// Heuristic mapping a state to a score for its current player.
pub type EvaluationFn<S> = fn(&S) -> f64;

/// Canonical registry names, in registration order.
pub const EVALUATION_NAMES: [&str; 3] = ["dummy", "distance", "detailed"];

/// Forced-win override of [`detailed_evaluation`], before scaling.
pub const WIN_SCORE: f64 = 99.0;

/// Forced-loss override of [`detailed_evaluation`], before scaling.
pub const LOSS_SCORE: f64 = -100.0;

/// Divisor that brings [`detailed_evaluation`] into [-1, 1].
pub const SCORE_SCALE: f64 = 100.0;

/// Looks up an evaluation function by name.
///
/// Both the short names in [`EVALUATION_NAMES`] and the `*_evaluation_func`
/// spellings are accepted. Unknown names are an error; there is no fallback.
pub fn get_evaluation_func<S: GameState>(name: &str) -> Result<EvaluationFn<S>, EvalError> {
    match name {
        "dummy" | "dummy_evaluation_func" => Ok(dummy_evaluation::<S> as EvaluationFn<S>),
        "distance" | "distance_evaluation_func" => Ok(distance_evaluation::<S> as EvaluationFn<S>),
        "detailed" | "detailed_evaluation_func" => Ok(detailed_evaluation::<S> as EvaluationFn<S>),
        _ => Err(EvalError::UnknownEvaluation(name.to_string())),
    }
}

/// Always 0. Baseline for heuristic-free search.
pub fn dummy_evaluation<S: GameState>(_state: &S) -> f64 {
    0.0
}

/// Favors positions where the mover is closer to a win than the opponents.
pub fn distance_evaluation<S: GameState>(state: &S) -> f64 {
    let player = state.current_player();
    let info = state.info();

    let mut score = 0.0;
    let mut scale = 1.0f64;
    for (&p, features) in &info {
        // A larger distance is worse for whoever owns it
        if p == player {
            score -= features.max_distance;
        } else {
            score += features.max_distance;
        }
        scale = scale.max(features.max_distance);
    }
    (score / scale).clamp(-1.0, 1.0)
}

/// Weighted pattern differential with forced-win and forced-loss overrides.
///
/// The mover's own forcing pattern takes priority over the opponent's, so an
/// immediate winning threat is never cancelled by a slower one.
pub fn detailed_evaluation<S: GameState>(state: &S) -> f64 {
    let player = state.current_player();
    let info = state.info();

    let mut score = 0.0;
    let mut will_win = false;
    let mut will_lose = false;
    for (&p, f) in &info {
        if p == player {
            will_win |= f.live_four > 0 || f.four > 0;
            score += own_pattern_score(f);
        } else {
            // An opponent's open four cannot be blocked on both ends
            will_lose |= f.live_four > 0;
            score += opponent_pattern_score(f);
        }
    }

    if will_win {
        score = WIN_SCORE;
    } else if will_lose {
        score = LOSS_SCORE;
    }
    (score / SCORE_SCALE).clamp(-1.0, 1.0)
}

fn own_pattern_score(f: &PlayerFeatures) -> f64 {
    -f.max_distance + 15.0 * f.live_three as f64 + 2.0 * f.three as f64 + 3.0 * f.live_two as f64
}

fn opponent_pattern_score(f: &PlayerFeatures) -> f64 {
    f.max_distance
        - 16.0 * f.four as f64
        - 14.0 * f.live_three as f64
        - 3.0 * f.three as f64
        - 5.0 * f.live_two as f64
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
