pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_board_table;
mod m20260901_000003_create_board_image_table;
mod m20260901_000004_create_board_comment_table;
mod m20260901_000005_create_board_like_table;
mod m20260902_000006_create_ingredient_category_table;
mod m20260902_000007_seed_ingredient_categories;
mod m20260902_000008_create_ingredient_table;
mod m20260902_000009_create_expiration_alert_table;
mod m20260903_000010_create_like_recipe_table;
mod m20260903_000011_create_food_ranking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_board_table::Migration),
            Box::new(m20260901_000003_create_board_image_table::Migration),
            Box::new(m20260901_000004_create_board_comment_table::Migration),
            Box::new(m20260901_000005_create_board_like_table::Migration),
            Box::new(m20260902_000006_create_ingredient_category_table::Migration),
            Box::new(m20260902_000007_seed_ingredient_categories::Migration),
            Box::new(m20260902_000008_create_ingredient_table::Migration),
            Box::new(m20260902_000009_create_expiration_alert_table::Migration),
            Box::new(m20260903_000010_create_like_recipe_table::Migration),
            Box::new(m20260903_000011_create_food_ranking_table::Migration),
        ]
    }
}
