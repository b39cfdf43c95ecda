//! Ingredient category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    expiration_days: i32,
}

impl<'a> CategoryFactory<'a> {
    /// Defaults to the name `"category{id}"` and a 7 day shelf life.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("category{}", next_id()),
            expiration_days: 7,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn expiration_days(mut self, days: i32) -> Self {
        self.expiration_days = days;
        self
    }

    pub async fn build(self) -> Result<entity::ingredient_category::Model, DbErr> {
        entity::ingredient_category::ActiveModel {
            name: ActiveValue::Set(self.name),
            expiration_days: ActiveValue::Set(self.expiration_days),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::ingredient_category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
