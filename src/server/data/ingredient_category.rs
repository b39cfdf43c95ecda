use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::ingredient::Category;

pub struct IngredientCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all categories ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::IngredientCategory::find()
            .order_by_asc(entity::ingredient_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::IngredientCategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }
}
