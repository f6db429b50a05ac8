use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::infra::game_locks::GameLocks;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_url: Option<String>,
    game_config: GameConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_url: None,
            game_config: GameConfig::default(),
        }
    }

    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let locks = Arc::new(GameLocks::new());
        match self.db_url {
            Some(url) => {
                // single entrypoint: connect + migrate
                let conn = bootstrap_db(&url).await?;
                Ok(AppState::new(conn, self.game_config, locks))
            }
            None => Ok(AppState::without_db(self.game_config, locks)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
