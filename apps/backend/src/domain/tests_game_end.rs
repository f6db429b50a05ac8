use crate::domain::board::{Player, Turn};
use crate::domain::game_end::resolve;
use crate::domain::sowing::apply_move;
use crate::domain::test_state_helpers::board_from_layout;
use crate::domain::validation::validate_move;
use crate::errors::domain::ValidationKind;

#[test]
fn extra_turn_into_empty_own_side_ends_game() {
    // Player one's last stone goes to the store; player one moves next but has nothing left.
    let mut game = board_from_layout(&[0, 0, 0, 0, 0, 1, 2, 0, 3, 0, 0, 4], 30, 32, Turn::PlayerOne);
    let mv = validate_move(Some(&game), "g", 6).unwrap();
    let out = apply_move(&mut game, mv);

    assert!(out.extra_turn);
    assert!(out.game_ended);
    assert_eq!(game.turn, Turn::GameOver);
    assert_eq!(game.score_one, 31);
    assert_eq!(game.score_two, 32 + 9);
    assert!(game.pits().iter().all(|p| p.stones == 0));
}

#[test]
fn opponent_with_empty_side_ends_game_and_mover_sweeps() {
    let mut game = board_from_layout(&[1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 10, 20, Turn::PlayerOne);
    let mv = validate_move(Some(&game), "g", 1).unwrap();
    let out = apply_move(&mut game, mv);

    assert!(!out.extra_turn);
    assert!(out.game_ended);
    assert_eq!(game.turn, Turn::GameOver);
    assert_eq!(game.score_one, 14);
    assert_eq!(game.score_two, 20);
    assert!(game.pits().iter().all(|p| p.stones == 0));
}

#[test]
fn finished_game_rejects_every_pit() {
    let mut game = board_from_layout(&[1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 10, 20, Turn::PlayerOne);
    let mv = validate_move(Some(&game), "g", 1).unwrap();
    apply_move(&mut game, mv);

    for pit in [-1, 0, 1, 2, 7, 12, 13] {
        let err = validate_move(Some(&game), "g", pit).unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::GameOver));
    }
}

#[test]
fn resolve_flips_turn_when_opponent_can_move() {
    let mut game = board_from_layout(&[1, 0, 0, 0, 2, 0], 0, 0, Turn::PlayerOne);
    assert!(!resolve(&mut game, Player::One, false));
    assert_eq!(game.turn, Turn::PlayerTwo);
}

#[test]
fn resolve_keeps_turn_on_extra_turn() {
    let mut game = board_from_layout(&[1, 0, 0, 0, 2, 0], 0, 0, Turn::PlayerOne);
    assert!(!resolve(&mut game, Player::One, true));
    assert_eq!(game.turn, Turn::PlayerOne);
}

#[test]
fn resolve_checks_only_the_next_player() {
    // Mover's own side is empty but the opponent still has stones: play continues.
    let mut game = board_from_layout(&[0, 0, 0, 0, 2, 0], 0, 0, Turn::PlayerOne);
    assert!(!resolve(&mut game, Player::One, false));
    assert_eq!(game.turn, Turn::PlayerTwo);
    assert_eq!(game.stones_on_side(Player::Two), 2);
}
