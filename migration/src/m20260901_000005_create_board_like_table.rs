use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260901_000001_create_user_table::User, m20260901_000002_create_board_table::Board};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardLike::Table)
                    .if_not_exists()
                    .col(integer(BoardLike::BoardId))
                    .col(integer(BoardLike::UserId))
                    .col(
                        timestamp_with_time_zone(BoardLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(BoardLike::BoardId)
                            .col(BoardLike::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_like_board_id")
                            .from(BoardLike::Table, BoardLike::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_like_user_id")
                            .from(BoardLike::Table, BoardLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardLike {
    #[sea_orm(iden = "board_likes")]
    Table,
    BoardId,
    UserId,
    CreatedAt,
}
