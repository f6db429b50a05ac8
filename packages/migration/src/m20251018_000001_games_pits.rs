use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Turn,
    ScoreOne,
    ScoreTwo,
    LittlePitsPerPlayer,
    StonesPerPit,
    CreatedAt,
    UpdatedAt,
    Version,
}

#[derive(Iden)]
enum Pits {
    Table,
    GameId,
    Position,
    Owner,
    Stones,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Turn).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Games::ScoreOne)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::ScoreTwo)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::LittlePitsPerPlayer)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Games::StonesPerPit).integer().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_turn")
                    .table(Games::Table)
                    .col(Games::Turn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pits::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pits::GameId).string_len(36).not_null())
                    .col(ColumnDef::new(Pits::Position).integer().not_null())
                    .col(ColumnDef::new(Pits::Owner).string_len(16).not_null())
                    .col(ColumnDef::new(Pits::Stones).integer().not_null())
                    .primary_key(Index::create().col(Pits::GameId).col(Pits::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pits_game_id")
                            .from(Pits::Table, Pits::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // pits first: it references games
        manager
            .drop_table(Table::drop().table(Pits::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_turn")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
