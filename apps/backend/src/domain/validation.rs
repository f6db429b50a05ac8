//! Move preconditions. Checks run in a fixed order and the first failure
//! wins; clients rely on that order.

use crate::domain::board::{Game, Player};
use crate::errors::domain::{DomainError, ValidationKind};

/// A move that passed every precondition. Only `validate_move` builds one,
/// so the selected pit is in range, owned by the mover and non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    position: u32,
    player: Player,
}

impl ValidatedMove {
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

/// Validate `pit` against `game` (`None` when no game with `game_id`
/// exists). Never mutates anything.
pub fn validate_move(
    game: Option<&Game>,
    game_id: &str,
    pit: i64,
) -> Result<ValidatedMove, DomainError> {
    let game = game.ok_or_else(|| DomainError::game_not_found(game_id))?;

    let Some(player) = game.turn.player() else {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            format!("Game {} is over", game.id),
        ));
    };

    let total = game.total_little_pits();
    let position = match u32::try_from(pit) {
        Ok(p) if (1..=total).contains(&p) => p,
        _ => {
            return Err(DomainError::validation(
                ValidationKind::BadPitSelection,
                format!("Pit {pit} is out of bounds; choose 1..={total}"),
            ))
        }
    };

    if game.owner_of(position) != player {
        return Err(DomainError::validation(
            ValidationKind::WrongTurn,
            format!("Pit {position} is not on the side of {}", player.as_str()),
        ));
    }

    if game.stones_at(position) == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidMovement,
            format!("Pit {position} is empty"),
        ));
    }

    Ok(ValidatedMove { position, player })
}
