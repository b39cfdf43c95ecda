//! Ingredient inventory and expiration alerts.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::ingredient::CreateIngredientDto,
    server::{
        data::{
            expiration_alert::ExpirationAlertRepository, ingredient::IngredientRepository,
            ingredient_category::IngredientCategoryRepository,
        },
        error::{ingredient::IngredientError, AppError},
        model::ingredient::{
            alert_date, Category, CreateIngredientParams, ExpirationAlert, Ingredient,
        },
        util::validate,
    },
};

const NAME_MAX: usize = 40;

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
    /// Days before expiration at which the alert becomes due.
    alert_lead_days: i64,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection, alert_lead_days: i64) -> Self {
        Self {
            db,
            alert_lead_days,
        }
    }

    /// Adds an ingredient to the user's inventory.
    ///
    /// The expiration date follows from the category shelf life. The alert is created in
    /// the same transaction as the ingredient.
    ///
    /// # Returns
    /// - `Ok(Ingredient)` - Stored ingredient
    /// - `Err(AppError::Validation)` - Name empty or longer than 40 characters, or the
    ///   expiration date would leave the calendar
    /// - `Err(IngredientError::CategoryNotFound)` - Unknown category
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateIngredientDto,
    ) -> Result<Ingredient, AppError> {
        let ingredient_name = dto.ingredient_name.trim().to_string();
        validate::length("ingredient_name", &ingredient_name, 1, NAME_MAX)?;

        let category = IngredientCategoryRepository::new(self.db)
            .find_by_id(dto.category_id)
            .await?
            .ok_or(IngredientError::CategoryNotFound(dto.category_id))?;

        let out_of_range =
            || AppError::Validation("purchase_date is out of range".to_string());
        let expiration_date = category
            .expiration_for(dto.purchase_date)
            .ok_or_else(out_of_range)?;
        let alert_date = alert_date(dto.purchase_date, expiration_date, self.alert_lead_days)
            .ok_or_else(out_of_range)?;

        let ingredient = IngredientRepository::new(self.db)
            .create(CreateIngredientParams {
                user_id,
                ingredient_name,
                category_id: category.id,
                purchase_date: dto.purchase_date,
                expiration_date,
                alert_date,
            })
            .await?;

        Ok(ingredient)
    }

    pub async fn names(&self, user_id: i32) -> Result<Vec<String>, AppError> {
        let names = IngredientRepository::new(self.db)
            .get_names_by_user(user_id)
            .await?;

        Ok(names)
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Ingredient>, AppError> {
        let ingredients = IngredientRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?;

        Ok(ingredients)
    }

    pub async fn get(&self, user_id: i32, ingredient_id: i32) -> Result<Ingredient, AppError> {
        let ingredient = IngredientRepository::new(self.db)
            .find_for_user(ingredient_id, user_id)
            .await?
            .ok_or(IngredientError::NotFound(ingredient_id))?;

        Ok(ingredient)
    }

    pub async fn delete(&self, user_id: i32, ingredient_id: i32) -> Result<(), AppError> {
        let deleted = IngredientRepository::new(self.db)
            .delete_for_user(ingredient_id, user_id)
            .await?;

        if !deleted {
            return Err(IngredientError::NotFound(ingredient_id).into());
        }

        Ok(())
    }

    pub async fn categories(&self) -> Result<Vec<Category>, AppError> {
        let categories = IngredientCategoryRepository::new(self.db).get_all().await?;

        Ok(categories)
    }

    /// Unread alerts due on or before `today`.
    pub async fn due_alerts(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<ExpirationAlert>, AppError> {
        let alerts = ExpirationAlertRepository::new(self.db)
            .get_due_unread(user_id, today)
            .await?;

        Ok(alerts)
    }

    pub async fn mark_alert_read(&self, user_id: i32, alert_id: i32) -> Result<(), AppError> {
        let updated = ExpirationAlertRepository::new(self.db)
            .mark_read(alert_id, user_id)
            .await?;

        if !updated {
            return Err(IngredientError::AlertNotFound(alert_id).into());
        }

        Ok(())
    }
}
