use proptest::prelude::*;

use crate::domain::board::{Player, Turn};
use crate::domain::test_state_helpers::{board_from_layout, set_pits, standard_game};
use crate::domain::validation::validate_move;
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

fn kind(err: DomainError) -> ValidationKind {
    err.validation_kind()
        .unwrap_or_else(|| panic!("expected a validation error, got {err}"))
}

#[test]
fn accepts_own_non_empty_pit() {
    let game = standard_game(Player::One);
    let mv = validate_move(Some(&game), &game.id, 3).unwrap();
    assert_eq!(mv.position(), 3);
    assert_eq!(mv.player(), Player::One);
}

#[test]
fn bounds_for_standard_board() {
    let game = standard_game(Player::One);
    for pit in [0, 13, -1, i64::MIN, i64::MAX, i64::from(u32::MAX) + 1] {
        let err = validate_move(Some(&game), &game.id, pit).unwrap_err();
        assert_eq!(kind(err), ValidationKind::BadPitSelection, "pit {pit}");
    }
    for pit in 1..=12 {
        let res = validate_move(Some(&game), &game.id, pit);
        assert!(
            !matches!(res, Err(ref e) if e.validation_kind() == Some(ValidationKind::BadPitSelection)),
            "pit {pit} should be in range"
        );
    }
}

#[test]
fn wrong_side_is_wrong_turn() {
    let game = standard_game(Player::One);
    let err = validate_move(Some(&game), &game.id, 7).unwrap_err();
    assert_eq!(kind(err), ValidationKind::WrongTurn);

    let game = standard_game(Player::Two);
    let err = validate_move(Some(&game), &game.id, 1).unwrap_err();
    assert_eq!(kind(err), ValidationKind::WrongTurn);
}

#[test]
fn empty_pit_is_invalid_movement() {
    let mut game = standard_game(Player::One);
    set_pits(&mut game, &[(4, 0)]);
    let err = validate_move(Some(&game), &game.id, 4).unwrap_err();
    assert_eq!(kind(err), ValidationKind::InvalidMovement);
}

#[test]
fn game_over_beats_bad_selection() {
    let game = board_from_layout(&[0; 12], 40, 32, Turn::GameOver);
    for pit in [0, 1, 7, 13, -5] {
        let err = validate_move(Some(&game), &game.id, pit).unwrap_err();
        assert_eq!(kind(err), ValidationKind::GameOver);
    }
}

#[test]
fn wrong_turn_beats_invalid_movement() {
    let mut game = standard_game(Player::One);
    set_pits(&mut game, &[(9, 0)]);
    let err = validate_move(Some(&game), &game.id, 9).unwrap_err();
    assert_eq!(kind(err), ValidationKind::WrongTurn);
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// A missing game is reported as not found whatever pit is sent.
    #[test]
    fn prop_missing_game_is_not_found(pit in test_gens::raw_pit()) {
        let err = validate_move(None, "missing", pit).unwrap_err();
        prop_assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
    }

    /// Validation never touches the board.
    #[test]
    fn prop_validation_is_side_effect_free(
        first in test_gens::player(),
        pit in test_gens::raw_pit(),
    ) {
        let game = standard_game(first);
        let before = game.clone();
        let _ = validate_move(Some(&game), &game.id, pit);
        prop_assert_eq!(game, before);
    }

    /// An accepted move always names a non-empty pit of the player to move.
    #[test]
    fn prop_accepted_moves_take_own_stones(
        layout in proptest::collection::vec(0u32..=3, 12),
        mover in test_gens::player(),
        pit in test_gens::raw_pit(),
    ) {
        let game = board_from_layout(&layout, 0, 0, Turn::from(mover));
        if let Ok(mv) = validate_move(Some(&game), &game.id, pit) {
            prop_assert_eq!(i64::from(mv.position()), pit);
            prop_assert_eq!(mv.player(), mover);
            prop_assert_eq!(game.owner_of(mv.position()), mover);
            let stones = game.pit_at(mv.position()).map(|p| p.stones);
            prop_assert!(stones.is_some_and(|s| s > 0));
        }
    }
}
