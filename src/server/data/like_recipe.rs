use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::server::model::recipe::SavedRecipe;

pub struct LikeRecipeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeRecipeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a recipe as serialized JSON text.
    pub async fn create(&self, user_id: i32, recipe: &Value) -> Result<SavedRecipe, DbErr> {
        let saved = entity::like_recipe::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe: ActiveValue::Set(recipe.to_string()),
            status: ActiveValue::Set(true),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        SavedRecipe::from_entity(saved)
    }

    /// The user's visible saved recipes, newest first.
    pub async fn get_visible_by_user(&self, user_id: i32) -> Result<Vec<SavedRecipe>, DbErr> {
        let rows = entity::prelude::LikeRecipe::find()
            .filter(entity::like_recipe::Column::UserId.eq(user_id))
            .filter(entity::like_recipe::Column::Status.eq(true))
            .order_by_desc(entity::like_recipe::Column::CreatedAt)
            .order_by_desc(entity::like_recipe::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter().map(SavedRecipe::from_entity).collect()
    }

    /// Hides one of the user's visible saved recipes.
    ///
    /// # Returns
    /// - `Ok(true)` - Recipe hidden
    /// - `Ok(false)` - No visible recipe with that id for this user
    pub async fn soft_delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LikeRecipe::update_many()
            .col_expr(entity::like_recipe::Column::Status, Expr::value(false))
            .filter(entity::like_recipe::Column::Id.eq(id))
            .filter(entity::like_recipe::Column::UserId.eq(user_id))
            .filter(entity::like_recipe::Column::Status.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
