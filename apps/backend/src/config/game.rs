//! Default board dimensions for newly created games.

use std::env;

use crate::domain::board::validate_dimensions;
use crate::error::AppError;

pub const DEFAULT_LITTLE_PITS_PER_PLAYER: u32 = 6;
pub const DEFAULT_STONES_PER_PIT: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub little_pits_per_player: u32,
    pub stones_per_pit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            little_pits_per_player: DEFAULT_LITTLE_PITS_PER_PLAYER,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}

impl GameConfig {
    /// Read `MANCALA_LITTLE_PITS_PER_PLAYER` and `MANCALA_STONES_PER_PIT`.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            little_pits_per_player: read_u32(
                "MANCALA_LITTLE_PITS_PER_PLAYER",
                DEFAULT_LITTLE_PITS_PER_PLAYER,
            )?,
            stones_per_pit: read_u32("MANCALA_STONES_PER_PIT", DEFAULT_STONES_PER_PIT)?,
        };
        validate_dimensions(config.little_pits_per_player, config.stones_per_pit)
            .map_err(|e| AppError::config(e.to_string()))?;
        Ok(config)
    }
}

fn read_u32(name: &str, default: u32) -> Result<u32, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<u32>().map_err(|_| {
            AppError::config(format!("{name} must be a positive integer, got '{raw}'"))
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::config(format!("{name} is unreadable: {e}"))),
    }
}
