//! Domain layer: the board model and the move-resolution engine.
//!
//! Everything here is pure and synchronous; persistence and HTTP live in
//! the outer layers.

pub mod board;
pub mod game_end;
pub mod sowing;
pub mod status;
pub mod validation;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_game_end;
#[cfg(test)]
mod tests_sowing;
#[cfg(test)]
mod tests_validation;

// Re-exports for ergonomics
pub use board::{random_turn, Game, Pit, Player, Turn};
pub use sowing::{apply_move, LastSown, MoveOutcome};
pub use status::BoardStatus;
pub use validation::{validate_move, ValidatedMove};
