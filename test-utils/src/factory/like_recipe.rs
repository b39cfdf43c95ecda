//! Saved recipe factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Saves `recipe` for `user_id` as a visible row.
pub async fn create_like_recipe(
    db: &DatabaseConnection,
    user_id: i32,
    recipe: Value,
) -> Result<entity::like_recipe::Model, DbErr> {
    entity::like_recipe::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        recipe: ActiveValue::Set(recipe.to_string()),
        status: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
