use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(pk_auto(Board::Id))
                    .col(integer(Board::UserId))
                    .col(string_len(Board::Title, 100))
                    .col(text(Board::Content))
                    .col(integer(Board::LikeCount).default(0))
                    .col(boolean(Board::Status).default(true))
                    .col(
                        timestamp_with_time_zone(Board::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Board::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_user_id")
                            .from(Board::Table, Board::UserId)
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
            .drop_table(Table::drop().table(Board::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Board {
    #[sea_orm(iden = "boards")]
    Table,
    Id,
    UserId,
    Title,
    Content,
    LikeCount,
    Status,
    CreatedAt,
    UpdatedAt,
}
