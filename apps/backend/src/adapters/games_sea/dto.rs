//! DTOs for the games_sea adapter.

use crate::entities::games::GameTurn;
use crate::entities::pits::PitOwner;

/// Row values for a brand-new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: String,
    pub turn: GameTurn,
    pub little_pits_per_player: i32,
    pub stones_per_pit: i32,
    pub pits: Vec<PitWrite>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitWrite {
    pub position: i32,
    pub owner: PitOwner,
    pub stones: i32,
}

/// Post-move values, applied only if the stored version still equals
/// `expected_version`.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: String,
    pub turn: GameTurn,
    pub score_one: i32,
    pub score_two: i32,
    pub expected_version: i32,
    /// `(position, stones)` for every pit whose count changed
    pub pit_stones: Vec<(i32, i32)>,
}

impl GameUpdate {
    pub fn new(id: impl Into<String>, turn: GameTurn, expected_version: i32) -> Self {
        Self {
            id: id.into(),
            turn,
            score_one: 0,
            score_two: 0,
            expected_version,
            pit_stones: Vec::new(),
        }
    }

    pub fn with_scores(mut self, score_one: i32, score_two: i32) -> Self {
        self.score_one = score_one;
        self.score_two = score_two;
        self
    }

    pub fn with_pit(mut self, position: i32, stones: i32) -> Self {
        self.pit_stones.push((position, stones));
        self
    }
}
