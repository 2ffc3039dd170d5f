//! Tests for the value-semantics game contract
//!
//! This module checks that:
//! - Exploring branches from a state never changes that state
//! - Explicit game trees report movers, outcomes and actions as built

use game_core::{GameEnd, GameState, GameTree, Gomoku, Move, PlayerId};

// =============================================================================
// Round-trip Tests
// =============================================================================

/// Walks every line of play up to `depth` moves below `state`.
fn explore(state: &Gomoku, depth: usize, visited: &mut u64) {
    *visited += 1;
    if depth == 0 {
        return;
    }
    for mv in state.legal_actions() {
        explore(&state.apply(mv), depth - 1, visited);
    }
}

#[test]
fn test_deep_branch_exploration_leaves_source_untouched() {
    let root = Gomoku::new(4, 4, 3)
        .unwrap()
        .with_moves(&[Move::new(0, 0), Move::new(3, 3)])
        .unwrap();
    let snapshot = root.clone();

    let mut visited = 0;
    explore(&root, 4, &mut visited);

    assert!(visited > 10_000, "explored only {visited} nodes");
    assert_eq!(root, snapshot);
    assert_eq!(root.moves_played(), 2);
    assert_eq!(root.legal_actions().len(), 14);
}

#[test]
fn test_successor_is_independent_of_later_moves() {
    let root = Gomoku::tictactoe();
    let child = root.apply(Move::new(1, 1));
    let before = child.clone();

    let _grandchild = child.apply(Move::new(0, 0)).apply(Move::new(2, 2));

    assert_eq!(child, before);
    assert_eq!(root.stone(1, 1), None);
}

// =============================================================================
// Explicit Tree Tests
// =============================================================================

#[test]
fn test_game_tree_navigation() {
    let max = PlayerId(1);
    let min = PlayerId(2);

    let mut tree = GameTree::new();
    let win = tree.leaf(min, GameEnd::Winner(max));
    let draw = tree.leaf(min, GameEnd::Draw);
    let root = tree.decision(max, vec![win, draw]);
    let state = tree.into_state(root);

    assert_eq!(state.current_player(), max);
    assert_eq!(state.game_end(), GameEnd::Ongoing);
    assert_eq!(state.legal_actions(), vec![0, 1]);

    let first = state.apply(0);
    assert_eq!(first.node(), win);
    assert_eq!(first.game_end().value_for(max), Some(1.0));
    assert_eq!(first.game_end().value_for(min), Some(-1.0));
    assert_eq!(state.apply(1).game_end().value_for(max), Some(0.0));
    assert_eq!(state.node(), root);
}

#[test]
fn test_childless_decision_is_draw() {
    let mut tree = GameTree::new();
    let root = tree.decision(PlayerId(1), Vec::new());
    let state = tree.into_state(root);

    assert!(state.game_end().is_terminal());
    assert_eq!(state.game_end(), GameEnd::Draw);
}
