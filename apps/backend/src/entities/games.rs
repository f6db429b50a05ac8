use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stored as text so the same schema works on SQLite and Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameTurn {
    #[sea_orm(string_value = "PLAYER_ONE")]
    PlayerOne,
    #[sea_orm(string_value = "PLAYER_TWO")]
    PlayerTwo,
    #[sea_orm(string_value = "GAME_OVER")]
    GameOver,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub turn: GameTurn,
    #[sea_orm(column_name = "score_one")]
    pub score_one: i32,
    #[sea_orm(column_name = "score_two")]
    pub score_two: i32,
    #[sea_orm(column_name = "little_pits_per_player")]
    pub little_pits_per_player: i32,
    #[sea_orm(column_name = "stones_per_pit")]
    pub stones_per_pit: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pits::Entity")]
    Pits,
}

impl Related<super::pits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
