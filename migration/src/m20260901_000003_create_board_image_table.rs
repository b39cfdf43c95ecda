use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_board_table::Board;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardImage::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardImage::Id))
                    .col(integer(BoardImage::BoardId))
                    .col(string(BoardImage::ImageUrl))
                    .col(
                        timestamp_with_time_zone(BoardImage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_image_board_id")
                            .from(BoardImage::Table, BoardImage::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardImage {
    #[sea_orm(iden = "board_images")]
    Table,
    Id,
    BoardId,
    ImageUrl,
    CreatedAt,
}
