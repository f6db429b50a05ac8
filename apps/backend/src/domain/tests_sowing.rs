use crate::domain::board::{Game, Player, Turn};
use crate::domain::sowing::{apply_move, LastSown, MoveOutcome};
use crate::domain::test_state_helpers::{set_pits, standard_game};
use crate::domain::validation::validate_move;

fn play(game: &mut Game, pit: i64) -> MoveOutcome {
    let id = game.id.clone();
    let mv = validate_move(Some(game), &id, pit).expect("move should be legal");
    apply_move(game, mv)
}

fn stones(game: &Game) -> Vec<u32> {
    game.pits().iter().map(|p| p.stones).collect()
}

#[test]
fn fresh_pit_one_ends_in_store_for_extra_turn() {
    let mut game = standard_game(Player::One);
    let out = play(&mut game, 1);

    assert_eq!(out.last, LastSown::Store);
    assert!(out.extra_turn);
    assert_eq!(game.turn, Turn::PlayerOne);
    assert_eq!(game.score_one, 1);
    assert_eq!(stones(&game), vec![0, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6]);
}

#[test]
fn single_stone_next_to_store_is_extra_turn() {
    let mut game = standard_game(Player::One);
    set_pits(&mut game, &[(6, 1)]);
    let out = play(&mut game, 6);

    assert!(out.extra_turn);
    assert_eq!(out.captured, 0);
    assert_eq!(game.turn, Turn::PlayerOne);
    assert_eq!(game.score_one, 1);
    assert_eq!(game.stones_at(6), 0);
}

#[test]
fn player_two_store_sits_before_position_one() {
    let mut game = standard_game(Player::Two);
    set_pits(&mut game, &[(12, 1)]);
    let out = play(&mut game, 12);

    assert_eq!(out.last, LastSown::Store);
    assert_eq!(game.turn, Turn::PlayerTwo);
    assert_eq!(game.score_two, 1);
    assert_eq!(game.score_one, 0);
    assert_eq!(game.stones_at(1), 6);
}

#[test]
fn last_stone_in_own_empty_pit_captures_opposite() {
    let mut game = standard_game(Player::One);
    set_pits(&mut game, &[(1, 1), (2, 0), (11, 4)]);
    let out = play(&mut game, 1);

    assert_eq!(out.last, LastSown::Pit(2));
    assert_eq!(out.captured, 5);
    assert_eq!(game.score_one, 5);
    assert_eq!(game.stones_at(2), 0);
    assert_eq!(game.stones_at(11), 0);
    assert_eq!(game.turn, Turn::PlayerTwo);
}

#[test]
fn capture_happens_even_when_opposite_is_empty() {
    let mut game = standard_game(Player::Two);
    set_pits(&mut game, &[(8, 1), (9, 0), (4, 0)]);
    let out = play(&mut game, 8);

    assert_eq!(out.captured, 1);
    assert_eq!(game.score_two, 1);
    assert_eq!(game.stones_at(9), 0);
    assert_eq!(game.turn, Turn::PlayerOne);
}

#[test]
fn landing_in_opponent_empty_pit_never_captures() {
    let mut game = standard_game(Player::One);
    set_pits(&mut game, &[(6, 2), (7, 0)]);
    let out = play(&mut game, 6);

    assert_eq!(out.last, LastSown::Pit(7));
    assert_eq!(out.captured, 0);
    assert!(!out.extra_turn);
    assert_eq!(game.score_one, 1);
    assert_eq!(game.stones_at(7), 1);
    assert_eq!(game.turn, Turn::PlayerTwo);
}

#[test]
fn only_the_last_stone_can_capture() {
    // Pit 3 empty on the way; the last stone lands in non-empty pit 4.
    let mut game = standard_game(Player::One);
    set_pits(&mut game, &[(2, 2), (3, 0), (4, 1)]);
    let out = play(&mut game, 2);

    assert_eq!(out.last, LastSown::Pit(4));
    assert_eq!(out.captured, 0);
    assert_eq!(game.stones_at(3), 1);
    assert_eq!(game.stones_at(4), 2);
    assert_eq!(game.score_one, 0);
}

#[test]
fn multiple_laps_skip_the_opponent_store() {
    let mut game = standard_game(Player::One);
    set_pits(&mut game, &[(6, 14)]);
    let out = play(&mut game, 6);

    // store, 7..=12, 1..=6, store
    assert_eq!(out.last, LastSown::Store);
    assert!(out.extra_turn);
    assert_eq!(game.score_one, 2);
    assert_eq!(game.score_two, 0);
    assert_eq!(stones(&game), vec![7, 7, 7, 7, 7, 1, 7, 7, 7, 7, 7, 7]);
    assert_eq!(game.turn, Turn::PlayerOne);
}

#[test]
fn sowing_conserves_stones_on_fresh_board() {
    let mut game = standard_game(Player::Two);

    // 10, 11, 12, store, 1, 2
    let out = play(&mut game, 9);
    assert_eq!(out.last, LastSown::Pit(2));
    assert_eq!(game.turn, Turn::PlayerOne);
    assert_eq!(game.total_stones(), game.expected_total());

    play(&mut game, 1);
    assert_eq!(game.total_stones(), game.expected_total());
}
