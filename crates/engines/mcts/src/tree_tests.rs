use super::*;
use game_core::gomoku::{FIRST, SECOND};
use game_core::{GameState, Gomoku, Move};

fn tree_with_two_children() -> (MctsTree<Gomoku>, NodeId, NodeId) {
    let root = Gomoku::tictactoe();
    let a = Move::new(0, 0);
    let b = Move::new(1, 1);

    let mut tree = MctsTree::new(root.clone());
    let first = tree.add_child(tree.root(), a, FIRST, root.apply(a));
    let second = tree.add_child(tree.root(), b, FIRST, root.apply(b));
    (tree, first, second)
}

#[test]
fn new_tree_has_only_root() {
    let tree = MctsTree::new(Gomoku::tictactoe());

    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    let root = tree.get(tree.root());
    assert!(root.parent.is_none());
    assert!(root.owner.is_none());
    assert_eq!(root.untried.len(), 9);
    // Stored reversed so the first enumerated action is popped first
    assert_eq!(root.untried.last(), Some(&Move::new(0, 0)));
}

#[test]
fn add_child_links_parent_and_child() {
    let (tree, first, second) = tree_with_two_children();

    assert_eq!(tree.len(), 3);
    let root = tree.get(tree.root());
    assert_eq!(
        root.children,
        vec![(Move::new(0, 0), first), (Move::new(1, 1), second)]
    );
    assert_eq!(tree.get(first).parent, Some(tree.root()));
    assert_eq!(tree.get(first).owner, Some(FIRST));
    assert_eq!(tree.get(second).action, Some(Move::new(1, 1)));
    assert_eq!(tree.get(second).state.current_player(), SECOND);
}

#[test]
fn select_child_prefers_unvisited_then_first() {
    let (mut tree, first, second) = tree_with_two_children();
    assert_eq!(tree.select_child(tree.root(), 1.0), Some(first));

    tree.backpropagate(first, 0.0);
    assert_eq!(tree.select_child(tree.root(), 1.0), Some(second));

    // Equal statistics: first child wins the tie
    tree.backpropagate(second, 0.0);
    assert_eq!(tree.select_child(tree.root(), 1.0), Some(first));
}

#[test]
fn select_child_follows_value_without_exploration() {
    let (mut tree, first, second) = tree_with_two_children();
    tree.backpropagate(first, -1.0);
    tree.backpropagate(second, 1.0);

    assert_eq!(tree.select_child(tree.root(), 0.0), Some(second));
}

#[test]
fn select_child_of_leaf_is_none() {
    let (tree, first, _) = tree_with_two_children();
    assert_eq!(tree.select_child(first, 1.0), None);
}

#[test]
fn backpropagate_negates_for_other_owner() {
    let root = Gomoku::tictactoe();
    let a = Move::new(1, 1);
    let b = Move::new(0, 0);
    let after_a = root.apply(a);

    let mut tree = MctsTree::new(root);
    let child = tree.add_child(tree.root(), a, FIRST, after_a.clone());
    let grandchild = tree.add_child(child, b, SECOND, after_a.apply(b));

    tree.backpropagate(grandchild, 1.0);

    assert_eq!(tree.get(grandchild).visits, 1);
    assert_eq!(tree.get(grandchild).value_sum, 1.0);
    assert_eq!(tree.get(child).visits, 1);
    assert_eq!(tree.get(child).value_sum, -1.0);

    let root = tree.get(tree.root());
    assert_eq!(root.visits, 1);
    assert_eq!(root.value_sum, 0.0);
}

#[test]
fn best_action_is_most_visited() {
    let (mut tree, first, second) = tree_with_two_children();
    assert_eq!(tree.best_action(), Some((Move::new(0, 0), 0)));

    tree.backpropagate(second, 0.0);
    tree.backpropagate(second, 0.0);
    tree.backpropagate(first, 1.0);

    assert_eq!(tree.best_action(), Some((Move::new(1, 1), 2)));
    assert_eq!(
        tree.root_visits(),
        vec![(Move::new(0, 0), 1), (Move::new(1, 1), 2)]
    );
    assert_eq!(tree.root_child(Move::new(0, 0)).map(|n| n.mean_value()), Some(1.0));
    assert!(tree.root_child(Move::new(2, 2)).is_none());
}

#[test]
fn best_action_of_unexpanded_root_is_none() {
    let tree = MctsTree::new(Gomoku::tictactoe());
    assert_eq!(tree.best_action(), None);
}
