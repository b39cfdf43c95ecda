use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::ingredient::{CreateIngredientParams, Ingredient};

pub struct IngredientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the ingredient and its unread expiration alert in one transaction.
    pub async fn create(&self, params: CreateIngredientParams) -> Result<Ingredient, DbErr> {
        let now = chrono::Utc::now();
        let txn = self.db.begin().await?;

        let ingredient = entity::ingredient::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            ingredient_name: ActiveValue::Set(params.ingredient_name),
            category_id: ActiveValue::Set(params.category_id),
            purchase_date: ActiveValue::Set(params.purchase_date),
            expiration_date: ActiveValue::Set(params.expiration_date),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::expiration_alert::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            ingredient_id: ActiveValue::Set(ingredient.id),
            alert_date: ActiveValue::Set(params.alert_date),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let category = entity::prelude::IngredientCategory::find_by_id(params.category_id)
            .one(&txn)
            .await?;

        txn.commit().await?;

        Ok(Ingredient::from_entity(ingredient, category))
    }

    /// Names of the user's ingredients in insertion order.
    pub async fn get_names_by_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Ingredient::find()
            .select_only()
            .column(entity::ingredient::Column::IngredientName)
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .order_by_asc(entity::ingredient::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// The user's ingredients, soonest expiration first.
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<Ingredient>, DbErr> {
        let rows = entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::IngredientCategory)
            .order_by_asc(entity::ingredient::Column::ExpirationDate)
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(ingredient, category)| Ingredient::from_entity(ingredient, category))
            .collect())
    }

    /// Gets an ingredient only if it belongs to `user_id`.
    pub async fn find_for_user(&self, id: i32, user_id: i32) -> Result<Option<Ingredient>, DbErr> {
        let row = entity::prelude::Ingredient::find_by_id(id)
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::IngredientCategory)
            .one(self.db)
            .await?;

        Ok(row.map(|(ingredient, category)| Ingredient::from_entity(ingredient, category)))
    }

    /// Deletes a user's ingredient along with its alerts.
    ///
    /// # Returns
    /// - `Ok(true)` - Ingredient deleted
    /// - `Ok(false)` - No such ingredient for this user
    pub async fn delete_for_user(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ExpirationAlert::delete_many()
            .filter(entity::expiration_alert::Column::IngredientId.eq(id))
            .filter(entity::expiration_alert::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Ingredient::delete_many()
            .filter(entity::ingredient::Column::Id.eq(id))
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
