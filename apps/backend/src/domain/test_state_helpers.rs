//! Board builders for domain unit tests.

use crate::domain::board::{Game, Player, Turn};

/// Fresh N=6, S=6 board with `first` to move.
pub fn standard_game(first: Player) -> Game {
    Game::new("test-game", 6, 6, first).expect("standard dimensions are valid")
}

/// Overwrite pit contents by position. Scores are left alone, so the
/// result need not conserve stones.
pub fn set_pits(game: &mut Game, stones: &[(u32, u32)]) {
    for &(position, count) in stones {
        game.pit_at_mut(position)
            .expect("position within board")
            .stones = count;
    }
}

/// Board whose pit contents are exactly `layout` (position order), with
/// the given scores and turn. `layout.len()` must be even.
pub fn board_from_layout(layout: &[u32], score_one: u32, score_two: u32, turn: Turn) -> Game {
    let n = (layout.len() / 2) as u32;
    let mut game = Game::new("layout-game", n, 1, Player::One).expect("non-empty layout");
    for (idx, &count) in layout.iter().enumerate() {
        game.pit_at_mut(idx as u32 + 1)
            .expect("position within board")
            .stones = count;
    }
    game.score_one = score_one;
    game.score_two = score_two;
    game.turn = turn;
    game
}
