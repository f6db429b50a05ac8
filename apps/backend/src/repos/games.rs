//! Game repository: loads and stores whole boards as domain [`Game`]s.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::domain::board::{Game, Pit, Player, Turn};
use crate::entities::games::{self, GameTurn};
use crate::entities::pits::{self, PitOwner};
use crate::errors::domain::{ConflictKind, DomainError};

/// A stored game plus the bookkeeping the domain does not care about.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game: Game,
    /// Bumped on every save; drives the ETag and optimistic checks.
    pub version: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Turn> for GameTurn {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::PlayerOne => GameTurn::PlayerOne,
            Turn::PlayerTwo => GameTurn::PlayerTwo,
            Turn::GameOver => GameTurn::GameOver,
        }
    }
}

impl From<GameTurn> for Turn {
    fn from(turn: GameTurn) -> Self {
        match turn {
            GameTurn::PlayerOne => Turn::PlayerOne,
            GameTurn::PlayerTwo => Turn::PlayerTwo,
            GameTurn::GameOver => Turn::GameOver,
        }
    }
}

impl From<Player> for PitOwner {
    fn from(p: Player) -> Self {
        match p {
            Player::One => PitOwner::PlayerOne,
            Player::Two => PitOwner::PlayerTwo,
        }
    }
}

impl From<PitOwner> for Player {
    fn from(o: PitOwner) -> Self {
        match o {
            PitOwner::PlayerOne => Player::One,
            PitOwner::PlayerTwo => Player::Two,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<GameRecord>, DomainError> {
    let Some(row) = games_adapter::find_by_id(conn, game_id).await? else {
        return Ok(None);
    };
    let pit_rows = games_adapter::find_pits(conn, game_id).await?;
    to_record(row, pit_rows).map(Some)
}

/// Like [`find_by_id`] but a missing game is `NotFound`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<GameRecord, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::game_not_found(game_id))
}

/// Insert (`expected_version == None`) or update a game.
///
/// Updates only succeed while the stored version equals `expected_version`;
/// a mismatch is an `OptimisticLock` conflict.
pub async fn save<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
    expected_version: Option<i32>,
) -> Result<GameRecord, DomainError> {
    match expected_version {
        None => insert(conn, game).await,
        Some(version) => update(conn, game, version).await,
    }
}

async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
) -> Result<GameRecord, DomainError> {
    let dto = games_adapter::GameCreate {
        id: game.id.clone(),
        turn: game.turn.into(),
        little_pits_per_player: to_db_int(game.little_pits_per_player())?,
        stones_per_pit: to_db_int(game.stones_per_pit)?,
        pits: game
            .pits()
            .iter()
            .map(|p| {
                Ok(games_adapter::PitWrite {
                    position: to_db_int(p.position)?,
                    owner: p.owner.into(),
                    stones: to_db_int(p.stones)?,
                })
            })
            .collect::<Result<_, DomainError>>()?,
    };
    let row = games_adapter::create_game(conn, dto).await?;
    Ok(GameRecord {
        game: game.clone(),
        version: row.version,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
    expected_version: i32,
) -> Result<GameRecord, DomainError> {
    let stored = games_adapter::find_pits(conn, &game.id).await?;

    let mut dto = games_adapter::GameUpdate::new(game.id.clone(), game.turn.into(), expected_version)
        .with_scores(to_db_int(game.score_one)?, to_db_int(game.score_two)?);
    for pit in game.pits() {
        let position = to_db_int(pit.position)?;
        let stones = to_db_int(pit.stones)?;
        let unchanged = stored
            .iter()
            .any(|row| row.position == position && row.stones == stones);
        if !unchanged {
            dto = dto.with_pit(position, stones);
        }
    }

    let row = games_adapter::update_game(conn, dto)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
                DomainError::conflict(ConflictKind::OptimisticLock, msg)
            }
            sea_orm::DbErr::RecordNotFound(_) => DomainError::game_not_found(&game.id),
            other => DomainError::from(other),
        })?;

    Ok(GameRecord {
        game: game.clone(),
        version: row.version,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn to_record(row: games::Model, pit_rows: Vec<pits::Model>) -> Result<GameRecord, DomainError> {
    let expected_pits = i64::from(row.little_pits_per_player) * 2;
    if pit_rows.len() as i64 != expected_pits {
        return Err(DomainError::corrupt(format!(
            "game {} has {} pits stored; expected {expected_pits}",
            row.id,
            pit_rows.len()
        )));
    }

    let pits = pit_rows
        .into_iter()
        .map(|p| {
            Ok(Pit {
                position: from_db_int(p.position, "pit position")?,
                owner: p.owner.into(),
                stones: from_db_int(p.stones, "pit stones")?,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let game = Game::restore(
        row.id,
        row.turn.into(),
        from_db_int(row.score_one, "score_one")?,
        from_db_int(row.score_two, "score_two")?,
        from_db_int(row.stones_per_pit, "stones_per_pit")?,
        pits,
    )?;

    Ok(GameRecord {
        game,
        version: row.version,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn to_db_int(v: u32) -> Result<i32, DomainError> {
    i32::try_from(v).map_err(|_| DomainError::corrupt(format!("value {v} does not fit the schema")))
}

fn from_db_int(v: i32, what: &str) -> Result<u32, DomainError> {
    u32::try_from(v).map_err(|_| DomainError::corrupt(format!("negative {what}: {v}")))
}
