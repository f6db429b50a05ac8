use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PitOwner {
    #[sea_orm(string_value = "PLAYER_ONE")]
    PlayerOne,
    #[sea_orm(string_value = "PLAYER_TWO")]
    PlayerTwo,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pits")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "game_id")]
    pub game_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i32,
    pub owner: PitOwner,
    pub stones: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
