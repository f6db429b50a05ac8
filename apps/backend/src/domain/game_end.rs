//! Terminal-board detection and the final sweep.

use crate::domain::board::{Game, Player, Turn};

/// Decide who moves next after `mover` played. If that player has no
/// stones left, both sides are swept into their owners' scores and the
/// game ends. Returns whether the game ended.
pub fn resolve(game: &mut Game, mover: Player, extra_turn: bool) -> bool {
    let next = if extra_turn { mover } else { mover.opponent() };

    if game.side_is_empty(next) {
        sweep(game);
        game.turn = Turn::GameOver;
        return true;
    }

    game.turn = Turn::from(next);
    false
}

fn sweep(game: &mut Game) {
    for player in [Player::One, Player::Two] {
        let remaining = game.stones_on_side(player);
        game.add_to_score(player, remaining);
    }
    for position in 1..=game.total_little_pits() {
        if let Some(pit) = game.pit_at_mut(position) {
            pit.stones = 0;
        }
    }
}
