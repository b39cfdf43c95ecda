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
                    .table(LikeRecipe::Table)
                    .if_not_exists()
                    .col(pk_auto(LikeRecipe::Id))
                    .col(integer(LikeRecipe::UserId))
                    .col(text(LikeRecipe::Recipe))
                    .col(boolean(LikeRecipe::Status).default(true))
                    .col(
                        timestamp_with_time_zone(LikeRecipe::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_recipe_user_id")
                            .from(LikeRecipe::Table, LikeRecipe::UserId)
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
            .drop_table(Table::drop().table(LikeRecipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LikeRecipe {
    #[sea_orm(iden = "like_recipes")]
    Table,
    Id,
    UserId,
    Recipe,
    Status,
    CreatedAt,
}
