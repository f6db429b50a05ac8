//! Domain-level error type used across the engine, repos and services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert with the
//! `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a move or a creation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    GameOver,
    BadPitSelection,
    WrongTurn,
    InvalidMovement,
    InvalidGameConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    OptimisticLock,
}

/// Operational failures below the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfraErrorKind {
    DbUnavailable,
    DataCorruption,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A rule of the game or of board construction was violated
    Validation(ValidationKind, String),
    NotFound(NotFoundKind, String),
    Conflict(ConflictKind, String),
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn game_not_found(game_id: &str) -> Self {
        Self::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    }

    pub fn corrupt(detail: impl Into<String>) -> Self {
        Self::infra(InfraErrorKind::DataCorruption, detail)
    }

    /// The validation kind, if this is a rule violation.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            _ => None,
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        use sea_orm::DbErr;
        match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string())
            }
            DbErr::Type(_) | DbErr::TryIntoErr { .. } => {
                DomainError::infra(InfraErrorKind::DataCorruption, e.to_string())
            }
            other => DomainError::infra(InfraErrorKind::Other("db".into()), other.to_string()),
        }
    }
}
