use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IngredientCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(IngredientCategory::Id))
                    .col(string_len_uniq(IngredientCategory::Name, 20))
                    .col(integer(IngredientCategory::ExpirationDays))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IngredientCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IngredientCategory {
    #[sea_orm(iden = "ingredient_categories")]
    Table,
    Id,
    Name,
    ExpirationDays,
}
