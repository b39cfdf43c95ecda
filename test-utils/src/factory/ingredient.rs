//! Ingredient and expiration alert factories.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inventory rows.
///
/// The factory does not create an alert; use `create_alert` for that.
pub struct IngredientFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    category_id: i32,
    ingredient_name: String,
    purchase_date: NaiveDate,
    expiration_date: NaiveDate,
}

impl<'a> IngredientFactory<'a> {
    /// Defaults to `"ingredient{id}"` bought today, expiring in 7 days.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, category_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            user_id,
            category_id,
            ingredient_name: format!("ingredient{}", next_id()),
            purchase_date: today,
            expiration_date: today + Duration::days(7),
        }
    }

    pub fn ingredient_name(mut self, name: impl Into<String>) -> Self {
        self.ingredient_name = name.into();
        self
    }

    pub fn purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = date;
        self
    }

    pub fn expiration_date(mut self, date: NaiveDate) -> Self {
        self.expiration_date = date;
        self
    }

    pub async fn build(self) -> Result<entity::ingredient::Model, DbErr> {
        entity::ingredient::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            ingredient_name: ActiveValue::Set(self.ingredient_name),
            category_id: ActiveValue::Set(self.category_id),
            purchase_date: ActiveValue::Set(self.purchase_date),
            expiration_date: ActiveValue::Set(self.expiration_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_ingredient(
    db: &DatabaseConnection,
    user_id: i32,
    category_id: i32,
) -> Result<entity::ingredient::Model, DbErr> {
    IngredientFactory::new(db, user_id, category_id).build().await
}

/// Creates an unread alert for `ingredient` on `alert_date`.
pub async fn create_alert(
    db: &DatabaseConnection,
    ingredient: &entity::ingredient::Model,
    alert_date: NaiveDate,
) -> Result<entity::expiration_alert::Model, DbErr> {
    entity::expiration_alert::ActiveModel {
        user_id: ActiveValue::Set(ingredient.user_id),
        ingredient_id: ActiveValue::Set(ingredient.id),
        alert_date: ActiveValue::Set(alert_date),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
