//! SeaORM adapter for games and their pits - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{games, pits};

pub mod dto;

pub use dto::{GameCreate, GameUpdate, PitWrite};

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id.to_string()).one(conn).await
}

/// Pits of one game in position order.
pub async fn find_pits<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<pits::Model>, sea_orm::DbErr> {
    pits::Entity::find()
        .filter(pits::Column::GameId.eq(game_id))
        .order_by_asc(pits::Column::Position)
        .all(conn)
        .await
}

/// Insert the game row and all of its pits.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: Set(dto.id.clone()),
        turn: Set(dto.turn),
        score_one: Set(0),
        score_two: Set(0),
        little_pits_per_player: Set(dto.little_pits_per_player),
        stones_per_pit: Set(dto.stones_per_pit),
        created_at: Set(now),
        updated_at: Set(now),
        version: Set(1),
    };
    let game = game_active.insert(conn).await?;

    if !dto.pits.is_empty() {
        let rows = dto.pits.into_iter().map(|p| pits::ActiveModel {
            game_id: Set(dto.id.clone()),
            position: Set(p.position),
            owner: Set(p.owner),
            stones: Set(p.stones),
        });
        pits::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
    }

    Ok(game)
}

/// Version-checked update of the game row plus changed pits, then refetch.
///
/// Zero affected rows means the game vanished (`RecordNotFound`) or another
/// writer bumped the version first (`Custom("OPTIMISTIC_LOCK:...")`).
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let result = games::Entity::update_many()
        .col_expr(games::Column::Turn, Expr::val(dto.turn).into())
        .col_expr(games::Column::ScoreOne, Expr::val(dto.score_one).into())
        .col_expr(games::Column::ScoreTwo, Expr::val(dto.score_two).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            games::Column::Version,
            Expr::col(games::Column::Version).add(1),
        )
        .filter(games::Column::Id.eq(dto.id.as_str()))
        .filter(games::Column::Version.eq(dto.expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_by_id(conn, &dto.id).await? {
            Some(current) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                dto.expected_version, current.version
            ))),
            None => Err(sea_orm::DbErr::RecordNotFound(format!(
                "game {} not found",
                dto.id
            ))),
        };
    }

    for (position, stones) in dto.pit_stones {
        pits::Entity::update_many()
            .col_expr(pits::Column::Stones, Expr::val(stones).into())
            .filter(pits::Column::GameId.eq(dto.id.as_str()))
            .filter(pits::Column::Position.eq(position))
            .exec(conn)
            .await?;
    }

    find_by_id(conn, &dto.id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("game {} not found", dto.id)))
}
