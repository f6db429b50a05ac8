//! Stone distribution, the capture rule and extra-turn detection.

use crate::domain::board::{Game, Player};
use crate::domain::game_end;
use crate::domain::validation::ValidatedMove;

/// Where the final stone of a move came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastSown {
    Store,
    Pit(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mover: Player,
    pub last: LastSown,
    /// Stones moved to the mover's score by a capture (0 when none).
    pub captured: u32,
    pub extra_turn: bool,
    pub game_ended: bool,
}

/// Play a validated move, then hand over to the game-end resolver.
pub fn apply_move(game: &mut Game, mv: ValidatedMove) -> MoveOutcome {
    let mover = mv.player();
    let boundary = game.store_boundary(mover);

    let mut remaining = take_all(game, mv.position());
    let mut cursor = game.next_position(mv.position());
    let mut just_sown_store = false;
    let mut last = LastSown::Store;
    let mut captured = 0;

    while remaining > 0 {
        if !just_sown_store && cursor == boundary {
            game.add_to_score(mover, 1);
            just_sown_store = true;
            remaining -= 1;
            last = LastSown::Store;
            continue;
        }

        let was_empty = sow_one(game, cursor);
        just_sown_store = false;
        remaining -= 1;
        last = LastSown::Pit(cursor);

        if remaining == 0 {
            if was_empty && game.owner_of(cursor) == mover {
                captured = capture(game, mover, cursor);
            }
            break;
        }
        cursor = game.next_position(cursor);
    }

    let extra_turn = last == LastSown::Store;
    let game_ended = game_end::resolve(game, mover, extra_turn);

    MoveOutcome {
        mover,
        last,
        captured,
        extra_turn,
        game_ended,
    }
}

fn take_all(game: &mut Game, position: u32) -> u32 {
    game.pit_at_mut(position)
        .map(|pit| std::mem::take(&mut pit.stones))
        .unwrap_or(0)
}

/// Drop one stone; returns whether the pit was empty beforehand.
fn sow_one(game: &mut Game, position: u32) -> bool {
    match game.pit_at_mut(position) {
        Some(pit) => {
            let was_empty = pit.stones == 0;
            pit.stones += 1;
            was_empty
        }
        None => false,
    }
}

/// Move the landing pit and its opposite into the mover's score.
fn capture(game: &mut Game, mover: Player, landing: u32) -> u32 {
    let opposite = game.opposite_of(landing);
    let stolen = take_all(game, landing) + take_all(game, opposite);
    game.add_to_score(mover, stolen);
    stolen
}
