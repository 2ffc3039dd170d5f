use super::*;
use game_core::gomoku::{FIRST, SECOND};
use game_core::{GameEnd, Gomoku, Move};

#[test]
fn random_player_returns_legal_move() {
    let game = Gomoku::tictactoe().apply(Move::new(1, 1));
    let mut player = RandomPlayer::new(SECOND);

    for _ in 0..20 {
        let result = player.get_action(&game);
        let mv = result.best_action.unwrap();
        assert!(game.legal_actions().contains(&mv));
        assert_eq!(result.value, 0.0);
        assert_eq!(result.nodes, 1);
    }
}

#[test]
fn random_player_handles_finished_game() {
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)].map(|(r, c)| Move::new(r, c));
    let game = Gomoku::tictactoe().with_moves(&moves).unwrap();
    assert_eq!(game.game_end(), GameEnd::Winner(FIRST));

    let result = RandomPlayer::new(SECOND).get_action(&game);
    assert!(result.best_action.is_none());
    assert_eq!(result.value, -1.0);
}

#[test]
fn seeded_players_agree() {
    let game = Gomoku::standard();
    let mut a = RandomPlayer::seeded(FIRST, 5);
    let mut b = RandomPlayer::seeded(FIRST, 5);

    for _ in 0..10 {
        assert_eq!(a.get_action(&game), b.get_action(&game));
    }
}

#[test]
#[should_panic(expected = "get_action called")]
fn random_player_checks_turn() {
    let mut player = RandomPlayer::new(SECOND);
    let _ = Player::<Gomoku>::get_action(&mut player, &Gomoku::tictactoe());
}
