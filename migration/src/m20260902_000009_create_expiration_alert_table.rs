use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User,
    m20260902_000008_create_ingredient_table::Ingredient,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExpirationAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(ExpirationAlert::Id))
                    .col(integer(ExpirationAlert::UserId))
                    .col(integer(ExpirationAlert::IngredientId))
                    .col(date(ExpirationAlert::AlertDate))
                    .col(boolean(ExpirationAlert::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(ExpirationAlert::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expiration_alert_user_id")
                            .from(ExpirationAlert::Table, ExpirationAlert::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expiration_alert_ingredient_id")
                            .from(ExpirationAlert::Table, ExpirationAlert::IngredientId)
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExpirationAlert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExpirationAlert {
    #[sea_orm(iden = "expiration_alerts")]
    Table,
    Id,
    UserId,
    IngredientId,
    AlertDate,
    IsRead,
    CreatedAt,
}
