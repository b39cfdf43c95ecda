use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodRanking::Table)
                    .if_not_exists()
                    .col(pk_auto(FoodRanking::Id))
                    .col(string_len_uniq(FoodRanking::FoodName, 100))
                    .col(integer(FoodRanking::Count).default(0))
                    .col(
                        timestamp_with_time_zone(FoodRanking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodRanking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FoodRanking {
    #[sea_orm(iden = "food_rankings")]
    Table,
    Id,
    FoodName,
    Count,
    UpdatedAt,
}
