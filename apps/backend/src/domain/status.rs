//! Flat status projection of a game.

use serde::Serialize;

use crate::domain::board::Game;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardStatus {
    /// Stone counts in position order.
    pub stones: Vec<u32>,
    pub score_one: u32,
    pub score_two: u32,
    pub turn: &'static str,
}

impl From<&Game> for BoardStatus {
    fn from(game: &Game) -> Self {
        BoardStatus {
            stones: game.pits().iter().map(|p| p.stones).collect(),
            score_one: game.score_one,
            score_two: game.score_two,
            turn: game.turn.label(),
        }
    }
}
