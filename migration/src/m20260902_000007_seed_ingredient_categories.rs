use sea_orm_migration::prelude::*;

use super::m20260902_000006_create_ingredient_category_table::IngredientCategory;

/// Default categories with their shelf life in days.
const DEFAULT_CATEGORIES: &[(&str, i32)] = &[
    ("meat", 3),
    ("vegetable", 7),
    ("dairy", 10),
    ("seafood", 2),
    ("fruit", 7),
    ("grain", 180),
    ("seasoning", 365),
    ("processed", 14),
    ("etc", 14),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(IngredientCategory::Table)
            .columns([IngredientCategory::Name, IngredientCategory::ExpirationDays]);

        for (name, days) in DEFAULT_CATEGORIES {
            insert.values_panic([(*name).into(), (*days).into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names = DEFAULT_CATEGORIES.iter().map(|(name, _)| *name);
        let delete = Query::delete()
            .from_table(IngredientCategory::Table)
            .and_where(Expr::col(IngredientCategory::Name).is_in(names))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
