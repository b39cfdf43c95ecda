use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User,
    m20260902_000006_create_ingredient_category_table::IngredientCategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(integer(Ingredient::UserId))
                    .col(string_len(Ingredient::IngredientName, 40))
                    .col(integer(Ingredient::CategoryId))
                    .col(date(Ingredient::PurchaseDate))
                    .col(date(Ingredient::ExpirationDate))
                    .col(
                        timestamp_with_time_zone(Ingredient::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingredient_user_id")
                            .from(Ingredient::Table, Ingredient::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingredient_category_id")
                            .from(Ingredient::Table, Ingredient::CategoryId)
                            .to(IngredientCategory::Table, IngredientCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ingredient {
    #[sea_orm(iden = "ingredients")]
    Table,
    Id,
    UserId,
    IngredientName,
    CategoryId,
    PurchaseDate,
    ExpirationDate,
    CreatedAt,
}
