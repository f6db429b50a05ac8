//! Game lifecycle service: creation, lookup and move resolution.
//!
//! Generic over `ConnectionTrait` so callers choose the transaction scope;
//! moves must run inside one transaction under the per-game lock.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::game::GameConfig;
use crate::domain::board::{random_turn, validate_dimensions, Game};
use crate::domain::sowing::{apply_move, LastSown, MoveOutcome};
use crate::domain::status::BoardStatus;
use crate::domain::validation::validate_move;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::{self as games_repo, GameRecord};

/// Creation parameters as received; missing values fall back to defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewGame {
    pub little_pits_per_player: Option<i64>,
    pub stones_per_pit: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct GameService {
    defaults: GameConfig,
}

impl GameService {
    pub fn new(defaults: GameConfig) -> Self {
        Self { defaults }
    }

    /// Create and store a fresh board with a uniformly random opening turn.
    pub async fn create_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        params: NewGame,
    ) -> Result<GameRecord, AppError> {
        let n = dimension(
            params.little_pits_per_player,
            self.defaults.little_pits_per_player,
            "little_pits_per_player",
        )?;
        let s = dimension(
            params.stones_per_pit,
            self.defaults.stones_per_pit,
            "stones_per_pit",
        )?;
        validate_dimensions(n, s)?;

        // ThreadRng is !Send; keep it out of the await points below.
        let opening = {
            let mut rng = rand::rng();
            random_turn(&mut rng)
        };
        let first = opening
            .player()
            .ok_or_else(|| AppError::internal("opening turn must be a player"))?;

        let game = Game::new(Uuid::new_v4().to_string(), n, s, first)?;
        let record = games_repo::save(conn, &game, None).await?;

        info!(
            game_id = %record.game.id,
            little_pits_per_player = n,
            stones_per_pit = s,
            turn = record.game.turn.as_str(),
            "game created"
        );
        Ok(record)
    }

    pub async fn get_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<GameRecord, AppError> {
        Ok(games_repo::require_game(conn, game_id).await?)
    }

    pub async fn status<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<BoardStatus, AppError> {
        let record = games_repo::require_game(conn, game_id).await?;
        Ok(BoardStatus::from(&record.game))
    }

    /// Read the freshest board, validate, sow, and persist.
    pub async fn make_move<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
        pit: i64,
    ) -> Result<(GameRecord, MoveOutcome), AppError> {
        let current = games_repo::find_by_id(conn, game_id).await?;

        let mv = match validate_move(current.as_ref().map(|r| &r.game), game_id, pit) {
            Ok(mv) => mv,
            Err(e) => {
                debug!(game_id, pit, error = %e, "move rejected");
                return Err(e.into());
            }
        };
        let GameRecord {
            mut game, version, ..
        } = current.ok_or_else(|| DomainError::game_not_found(game_id))?;

        let outcome = apply_move(&mut game, mv);
        debug_assert_eq!(game.total_stones(), game.expected_total());

        let record = games_repo::save(conn, &game, Some(version)).await?;
        log_outcome(&record.game, mv.position(), &outcome);
        Ok((record, outcome))
    }
}

fn dimension(raw: Option<i64>, default: u32, name: &str) -> Result<u32, AppError> {
    match raw {
        None => Ok(default),
        Some(v) => u32::try_from(v).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidGameConfig,
                format!("{name} must be a positive integer, got {v}"),
            )
            .into()
        }),
    }
}

fn log_outcome(game: &Game, position: u32, outcome: &MoveOutcome) {
    let last = match outcome.last {
        LastSown::Store => "store".to_string(),
        LastSown::Pit(p) => p.to_string(),
    };
    debug!(
        game_id = %game.id,
        pit = position,
        mover = outcome.mover.as_str(),
        last = %last,
        "stones sown"
    );
    if outcome.captured > 0 {
        info!(game_id = %game.id, captured = outcome.captured, "capture");
    }
    if outcome.extra_turn && !outcome.game_ended {
        debug!(game_id = %game.id, "extra turn");
    }
    if outcome.game_ended {
        info!(
            game_id = %game.id,
            score_one = game.score_one,
            score_two = game.score_two,
            "game over"
        );
    }
}
