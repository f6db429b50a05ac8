//! Error codes for the Mancala backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in the `code` field of a problem-details response.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move rejections
    /// Game has already finished
    GameOver,
    /// Pit index outside 1..=2N
    BadPitSelection,
    /// Pit belongs to the player not on turn
    WrongTurn,
    /// Selected pit holds no stones
    InvalidMovement,

    // Request validation
    /// Creation parameters out of range
    InvalidGameConfig,
    /// Pit path segment is not an integer
    InvalidPitParameter,
    /// Malformed request (usually a JSON body)
    BadRequest,

    // Not found
    GameNotFound,
    /// Fallback for unmatched routes and kinds
    NotFound,

    // Conflicts
    /// Stored game changed under a concurrent writer
    OptimisticLock,

    // System
    DbError,
    DbUnavailable,
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Every variant, in declaration order.
    pub const ALL: [ErrorCode; 15] = [
        Self::GameOver,
        Self::BadPitSelection,
        Self::WrongTurn,
        Self::InvalidMovement,
        Self::InvalidGameConfig,
        Self::InvalidPitParameter,
        Self::BadRequest,
        Self::GameNotFound,
        Self::NotFound,
        Self::OptimisticLock,
        Self::DbError,
        Self::DbUnavailable,
        Self::DataCorruption,
        Self::Internal,
        Self::ConfigError,
    ];

    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GameOver => "GAME_OVER",
            Self::BadPitSelection => "BAD_PIT_SELECTION",
            Self::WrongTurn => "WRONG_TURN",
            Self::InvalidMovement => "INVALID_MOVEMENT",

            Self::InvalidGameConfig => "INVALID_GAME_CONFIG",
            Self::InvalidPitParameter => "INVALID_PIT_PARAMETER",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
