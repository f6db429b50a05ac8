use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::board::{random_turn, Game, Pit, Player, Turn};
use crate::domain::test_state_helpers::standard_game;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

#[test]
fn fresh_board_layout() {
    let game = standard_game(Player::Two);

    assert_eq!(game.total_little_pits(), 12);
    assert_eq!(game.little_pits_per_player(), 6);
    assert_eq!(game.turn, Turn::PlayerTwo);
    assert_eq!((game.score_one, game.score_two), (0, 0));
    assert!(game.pits().iter().all(|p| p.stones == 6));
    for (idx, pit) in game.pits().iter().enumerate() {
        assert_eq!(pit.position, idx as u32 + 1);
    }
    assert_eq!(game.total_stones(), 72);
    assert_eq!(game.expected_total(), 72);
}

#[test]
fn ownership_splits_at_n() {
    let game = standard_game(Player::One);
    assert_eq!(game.owner_of(1), Player::One);
    assert_eq!(game.owner_of(6), Player::One);
    assert_eq!(game.owner_of(7), Player::Two);
    assert_eq!(game.owner_of(12), Player::Two);
    assert!(game.side(Player::Two).all(|p| p.position > 6));
}

#[test]
fn opposite_and_next() {
    let game = standard_game(Player::One);
    assert_eq!(game.opposite_of(1), 12);
    assert_eq!(game.opposite_of(6), 7);
    assert_eq!(game.opposite_of(2), 11);
    assert_eq!(game.next_position(5), 6);
    assert_eq!(game.next_position(12), 1);
}

#[test]
fn store_boundaries() {
    let game = standard_game(Player::One);
    assert_eq!(game.store_boundary(Player::One), 7);
    assert_eq!(game.store_boundary(Player::Two), 1);
}

#[test]
fn pit_at_out_of_range_is_none() {
    let game = standard_game(Player::One);
    assert!(game.pit_at(0).is_none());
    assert!(game.pit_at(13).is_none());
    assert_eq!(
        game.pit_at(3),
        Some(&Pit {
            position: 3,
            owner: Player::One,
            stones: 6
        })
    );
}

#[test]
fn rejects_zero_dimensions() {
    for (n, s) in [(0, 6), (6, 0), (0, 0)] {
        let err = Game::new("g", n, s, Player::One).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidGameConfig, _)
        ));
    }
}

#[test]
fn single_pit_per_player_is_allowed() {
    let game = Game::new("g", 1, 1, Player::One).unwrap();
    assert_eq!(game.total_little_pits(), 2);
    assert_eq!(game.opposite_of(1), 2);
    assert_eq!(game.next_position(2), 1);
}

#[test]
fn labels() {
    assert_eq!(Turn::PlayerOne.label(), "Player one");
    assert_eq!(Turn::PlayerTwo.label(), "Player two");
    assert_eq!(Turn::GameOver.label(), "Game Over");
    assert_eq!(Turn::GameOver.player(), None);
    assert_eq!(Turn::from(Player::Two), Turn::PlayerTwo);
}

#[test]
fn random_turn_picks_both_players_and_never_game_over() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen_one = false;
    let mut seen_two = false;
    for _ in 0..200 {
        match random_turn(&mut rng) {
            Turn::PlayerOne => seen_one = true,
            Turn::PlayerTwo => seen_two = true,
            Turn::GameOver => panic!("initial turn must not be GAME_OVER"),
        }
    }
    assert!(seen_one && seen_two);
}

#[test]
fn restore_accepts_consistent_parts() {
    let fresh = standard_game(Player::One);
    let restored = Game::restore(
        fresh.id.clone(),
        fresh.turn,
        0,
        0,
        6,
        fresh.pits().iter().rev().copied().collect(),
    )
    .unwrap();
    assert_eq!(restored, fresh);
}

#[test]
fn restore_rejects_broken_layouts() {
    let fresh = standard_game(Player::One);

    let mut odd: Vec<Pit> = fresh.pits().to_vec();
    odd.pop();
    let err = Game::restore("g", Turn::PlayerOne, 0, 0, 6, odd).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));

    let mut swapped_owner: Vec<Pit> = fresh.pits().to_vec();
    swapped_owner[0].owner = Player::Two;
    assert!(Game::restore("g", Turn::PlayerOne, 0, 0, 6, swapped_owner).is_err());

    let leaked = Game::restore("g", Turn::PlayerOne, 1, 0, 6, fresh.pits().to_vec());
    assert!(leaked.is_err(), "one stone too many must be rejected");
}
