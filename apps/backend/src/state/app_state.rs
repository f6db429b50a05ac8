use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::game::GameConfig;
use crate::infra::game_locks::GameLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Defaults for newly created games
    pub game_config: GameConfig,
    pub game_locks: Arc<GameLocks>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, game_config: GameConfig, game_locks: Arc<GameLocks>) -> Self {
        Self {
            db: Some(db),
            game_config,
            game_locks,
        }
    }

    /// State without a database; every data route answers `DB_UNAVAILABLE`.
    pub fn without_db(game_config: GameConfig, game_locks: Arc<GameLocks>) -> Self {
        Self {
            db: None,
            game_config,
            game_locks,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
