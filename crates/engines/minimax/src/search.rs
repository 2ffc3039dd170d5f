//! Recursive minimax search, with and without alpha-beta pruning.
//!
//! All values are from the perspective of the root player: nodes where that
//! player moves maximize, every other node minimizes. Terminal positions score
//! exactly -1, 0 or +1.

use game_core::{EvaluationFn, GameState, PlayerId};

/// A node value together with the action that achieves it.
pub type Scored<A> = (f64, Option<A>);

/// Exhaustive minimax.
///
/// Only tractable on small trees: there is no depth bound, and a game that
/// never terminates never returns. Ties keep the first action in order.
pub fn minimax<S: GameState>(state: &S, player: PlayerId, nodes: &mut u64) -> Scored<S::Action> {
    *nodes += 1;

    if let Some(value) = state.game_end().value_for(player) {
        return (value, None);
    }

    let maximizing = state.current_player() == player;
    let mut best: Scored<S::Action> = (0.0, None);

    for action in state.legal_actions() {
        let (value, _) = minimax(&state.apply(action), player, nodes);
        if best.1.is_none() || improves(value, best.0, maximizing) {
            best = (value, Some(action));
        }
    }
    best
}

/// Minimax with alpha-beta pruning.
///
/// `alpha` is the value the maximizing side can already guarantee, `beta` the
/// value the minimizing side can. Pruning never changes the root value.
pub fn alpha_beta<S: GameState>(
    state: &S,
    player: PlayerId,
    mut alpha: f64,
    mut beta: f64,
    nodes: &mut u64,
) -> Scored<S::Action> {
    *nodes += 1;

    if let Some(value) = state.game_end().value_for(player) {
        return (value, None);
    }

    let maximizing = state.current_player() == player;
    let mut best: Scored<S::Action> = (0.0, None);

    for action in state.legal_actions() {
        let (value, _) = alpha_beta(&state.apply(action), player, alpha, beta, nodes);
        if best.1.is_none() || improves(value, best.0, maximizing) {
            best = (value, Some(action));
        }

        if maximizing {
            if best.0 >= beta {
                return best; // Beta cutoff
            }
            alpha = alpha.max(best.0);
        } else {
            if best.0 <= alpha {
                return best; // Alpha cutoff
            }
            beta = beta.min(best.0);
        }
    }
    best
}

/// Depth-limited alpha-beta with a heuristic at the frontier.
///
/// `depth` counts full rounds: it only shrinks on the way out of a node where
/// an opponent moves, so `depth = 1` lets the root player move and every
/// opponent reply before the heuristic is consulted. Terminal states are
/// scored exactly before the depth is checked.
pub fn cutting_off_alpha_beta<S: GameState>(
    state: &S,
    player: PlayerId,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    evaluation: EvaluationFn<S>,
    nodes: &mut u64,
) -> Scored<S::Action> {
    *nodes += 1;

    if let Some(value) = state.game_end().value_for(player) {
        return (value, None);
    }
    if depth == 0 {
        return (evaluate_for(state, player, evaluation), None);
    }

    let maximizing = state.current_player() == player;
    let child_depth = if maximizing { depth } else { depth - 1 };
    let mut best: Scored<S::Action> = (0.0, None);

    for action in state.legal_actions() {
        let (value, _) = cutting_off_alpha_beta(
            &state.apply(action),
            player,
            child_depth,
            alpha,
            beta,
            evaluation,
            nodes,
        );
        if best.1.is_none() || improves(value, best.0, maximizing) {
            best = (value, Some(action));
        }

        if maximizing {
            if best.0 >= beta {
                return best;
            }
            alpha = alpha.max(best.0);
        } else {
            if best.0 <= alpha {
                return best;
            }
            beta = beta.min(best.0);
        }
    }
    best
}

/// Heuristic value of `state` seen by `player` rather than by the mover.
pub fn evaluate_for<S: GameState>(state: &S, player: PlayerId, evaluation: EvaluationFn<S>) -> f64 {
    let value = evaluation(state);
    if state.current_player() == player {
        value
    } else {
        -value
    }
}

#[inline]
fn improves(value: f64, best: f64, maximizing: bool) -> bool {
    if maximizing {
        value > best
    } else {
        value < best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
