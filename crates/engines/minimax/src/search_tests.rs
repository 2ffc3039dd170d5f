use super::*;
use game_core::{GameEnd, GameTree, TreeState};
use std::cell::Cell;

const MAX: PlayerId = PlayerId(1);
const MIN: PlayerId = PlayerId(2);

thread_local! {
    static EVAL_CALLS: Cell<u32> = const { Cell::new(0) };
}

fn counting_heuristic(state: &TreeState) -> f64 {
    EVAL_CALLS.with(|calls| calls.set(calls.get() + 1));
    state.heuristic()
}

fn eval_calls() -> u32 {
    EVAL_CALLS.with(|calls| calls.get())
}

/// Three plies: MAX, MIN, MAX, then terminal leaves.
///
/// ```text
///              root (MAX) = 0
///          /                   \
///      A (MIN) = 0            B (MIN) = -1
///      /       \              /        \
///  A1 = 0    A2 = 1       B1 = -1     B2 = 1
///  [0, -1]   [1, 0]       [-1, -1]    [1, 1]
/// ```
///
/// Alpha-beta cuts the second leaf of A2 and all of B2.
fn crafted_tree() -> TreeState {
    let mut t = GameTree::new();
    let leaf = |t: &mut GameTree, end| t.leaf(MIN, end);

    let a1 = vec![leaf(&mut t, GameEnd::Draw), leaf(&mut t, GameEnd::Winner(MIN))];
    let a1 = t.decision(MAX, a1);
    let a2 = vec![leaf(&mut t, GameEnd::Winner(MAX)), leaf(&mut t, GameEnd::Draw)];
    let a2 = t.decision(MAX, a2);
    let b1 = vec![leaf(&mut t, GameEnd::Winner(MIN)), leaf(&mut t, GameEnd::Winner(MIN))];
    let b1 = t.decision(MAX, b1);
    let b2 = vec![leaf(&mut t, GameEnd::Winner(MAX)), leaf(&mut t, GameEnd::Winner(MAX))];
    let b2 = t.decision(MAX, b2);

    let a = t.decision(MIN, vec![a1, a2]);
    let b = t.decision(MIN, vec![b1, b2]);
    let root = t.decision(MAX, vec![a, b]);
    t.into_state(root)
}

#[test]
fn test_minimax_value_and_action_on_crafted_tree() {
    let mut nodes = 0;
    let (value, action) = minimax(&crafted_tree(), MAX, &mut nodes);
    assert_eq!(value, 0.0);
    assert_eq!(action, Some(0));
    assert_eq!(nodes, 15);
}

#[test]
fn test_alpha_beta_prunes_crafted_tree() {
    let mut nodes = 0;
    let (value, action) = alpha_beta(
        &crafted_tree(),
        MAX,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &mut nodes,
    );
    assert_eq!(value, 0.0);
    assert_eq!(action, Some(0));
    assert_eq!(nodes, 11);
}

#[test]
fn test_ties_keep_first_action() {
    let mut t = GameTree::new();
    let draw = t.leaf(MIN, GameEnd::Draw);
    let win_a = t.leaf(MIN, GameEnd::Winner(MAX));
    let win_b = t.leaf(MIN, GameEnd::Winner(MAX));
    let root = t.decision(MAX, vec![draw, win_a, win_b]);
    let state = t.into_state(root);

    let mut nodes = 0;
    assert_eq!(minimax(&state, MAX, &mut nodes), (1.0, Some(1)));
    let mut nodes = 0;
    assert_eq!(
        alpha_beta(&state, MAX, f64::NEG_INFINITY, f64::INFINITY, &mut nodes),
        (1.0, Some(1))
    );
}

#[test]
fn test_terminal_root_returns_exact_value() {
    for end in [GameEnd::Winner(MAX), GameEnd::Draw, GameEnd::Winner(MIN)] {
        let mut t = GameTree::new();
        let root = t.leaf(MAX, end);
        let state = t.into_state(root);
        let expected = end.value_for(MAX).unwrap();

        let mut nodes = 0;
        assert_eq!(minimax(&state, MAX, &mut nodes), (expected, None));
        assert_eq!(
            alpha_beta(&state, MAX, f64::NEG_INFINITY, f64::INFINITY, &mut nodes),
            (expected, None)
        );
        let before = eval_calls();
        assert_eq!(
            cutting_off_alpha_beta(
                &state,
                MAX,
                0,
                f64::NEG_INFINITY,
                f64::INFINITY,
                counting_heuristic,
                &mut nodes
            ),
            (expected, None)
        );
        assert_eq!(eval_calls(), before);
    }
}

#[test]
fn test_cutoff_depth_zero_evaluates_root_once() {
    let mut t = GameTree::new();
    let leaf = t.leaf(MIN, GameEnd::Winner(MAX));
    let root = t.decision(MAX, vec![leaf]);
    t.set_heuristic(root, 0.5);
    let state = t.into_state(root);

    let before = eval_calls();
    let mut nodes = 0;
    let result = cutting_off_alpha_beta(
        &state,
        MAX,
        0,
        f64::NEG_INFINITY,
        f64::INFINITY,
        counting_heuristic,
        &mut nodes,
    );
    assert_eq!(result, (0.5, None));
    assert_eq!(eval_calls() - before, 1);
    assert_eq!(nodes, 1);
}

#[test]
fn test_cutoff_depth_counts_full_rounds() {
    // Every frontier node is a MAX decision with one further (unreached) leaf
    let mut t = GameTree::new();
    let frontier = |t: &mut GameTree, score: f64| {
        let beyond = t.leaf(MIN, GameEnd::Winner(MIN));
        let id = t.decision(MAX, vec![beyond]);
        t.set_heuristic(id, score);
        id
    };
    let a1 = frontier(&mut t, 0.2);
    let a2 = frontier(&mut t, 0.6);
    let b1 = frontier(&mut t, 0.4);
    let a = t.decision(MIN, vec![a1, a2]);
    let b = t.decision(MIN, vec![b1]);
    let root = t.decision(MAX, vec![a, b]);
    let state = t.into_state(root);

    let before = eval_calls();
    let mut nodes = 0;
    let (value, action) = cutting_off_alpha_beta(
        &state,
        MAX,
        1,
        f64::NEG_INFINITY,
        f64::INFINITY,
        counting_heuristic,
        &mut nodes,
    );
    assert!((value - 0.4).abs() < 1e-12);
    assert_eq!(action, Some(1));
    assert_eq!(nodes, 6);
    assert_eq!(eval_calls() - before, 3);
}

#[test]
fn test_cutoff_negates_opponent_perspective() {
    // MIN moves twice in a row, so the frontier belongs to MIN
    let mut t = GameTree::new();
    let beyond = t.leaf(MAX, GameEnd::Draw);
    let frontier = t.decision(MIN, vec![beyond]);
    t.set_heuristic(frontier, 0.3);
    let a = t.decision(MIN, vec![frontier]);
    let root = t.decision(MAX, vec![a]);
    let state = t.into_state(root);

    let mut nodes = 0;
    let (value, action) = cutting_off_alpha_beta(
        &state,
        MAX,
        1,
        f64::NEG_INFINITY,
        f64::INFINITY,
        counting_heuristic,
        &mut nodes,
    );
    assert!((value + 0.3).abs() < 1e-12);
    assert_eq!(action, Some(0));
}

#[test]
fn test_evaluate_for_flips_sign() {
    let mut t = GameTree::new();
    let beyond = t.leaf(MAX, GameEnd::Draw);
    let root = t.decision(MIN, vec![beyond]);
    t.set_heuristic(root, 0.7);
    let state = t.into_state(root);

    assert!((evaluate_for(&state, MIN, counting_heuristic) - 0.7).abs() < 1e-12);
    assert!((evaluate_for(&state, MAX, counting_heuristic) + 0.7).abs() < 1e-12);
}
