//! Ingredient inventory domain models and parameters.

use chrono::{Duration, NaiveDate};

use crate::model::ingredient::{CategoryDto, ExpirationAlertDto, IngredientDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Shelf life applied to new ingredients of this category.
    pub expiration_days: i32,
}

impl Category {
    pub fn from_entity(entity: entity::ingredient_category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            expiration_days: entity.expiration_days,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            expiration_days: self.expiration_days,
        }
    }

    /// Expiration date of an ingredient of this category bought on `purchase_date`.
    ///
    /// `None` when the date falls outside chrono's calendar.
    pub fn expiration_for(&self, purchase_date: NaiveDate) -> Option<NaiveDate> {
        purchase_date.checked_add_signed(Duration::days(i64::from(self.expiration_days)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i32,
    pub user_id: i32,
    pub ingredient_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub purchase_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

impl Ingredient {
    /// Converts an ingredient row and its category at the repository boundary.
    pub fn from_entity(
        entity: entity::ingredient::Model,
        category: Option<entity::ingredient_category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            ingredient_name: entity.ingredient_name,
            category_id: entity.category_id,
            category_name: category.map(|c| c.name).unwrap_or_default(),
            purchase_date: entity.purchase_date,
            expiration_date: entity.expiration_date,
        }
    }

    /// Converts to a DTO with the day count relative to `today`.
    pub fn into_dto(self, today: NaiveDate) -> IngredientDto {
        IngredientDto {
            d_day: d_day(self.expiration_date, today),
            id: self.id,
            ingredient_name: self.ingredient_name,
            category_id: self.category_id,
            category_name: self.category_name,
            purchase_date: self.purchase_date,
            expiration_date: self.expiration_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpirationAlert {
    pub id: i32,
    pub ingredient_id: i32,
    pub ingredient_name: String,
    pub alert_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub is_read: bool,
}

impl ExpirationAlert {
    /// Converts an alert row joined with its ingredient.
    ///
    /// Alerts are deleted with their ingredient, so a missing ingredient only happens when
    /// rows change underneath the query; the expiration then falls back to the alert date.
    pub fn from_entity(
        entity: entity::expiration_alert::Model,
        ingredient: Option<entity::ingredient::Model>,
    ) -> Self {
        let (ingredient_name, expiration_date) = match ingredient {
            Some(i) => (i.ingredient_name, i.expiration_date),
            None => (String::new(), entity.alert_date),
        };

        Self {
            id: entity.id,
            ingredient_id: entity.ingredient_id,
            ingredient_name,
            alert_date: entity.alert_date,
            expiration_date,
            is_read: entity.is_read,
        }
    }

    pub fn into_dto(self, today: NaiveDate) -> ExpirationAlertDto {
        ExpirationAlertDto {
            d_day: d_day(self.expiration_date, today),
            id: self.id,
            ingredient_id: self.ingredient_id,
            ingredient_name: self.ingredient_name,
            alert_date: self.alert_date,
            expiration_date: self.expiration_date,
            is_read: self.is_read,
        }
    }
}

/// Days from `today` until `expiration_date`.
pub fn d_day(expiration_date: NaiveDate, today: NaiveDate) -> i64 {
    (expiration_date - today).num_days()
}

/// Date an ingredient's alert becomes due.
///
/// `lead_days` before expiration, but never before the purchase date.
pub fn alert_date(
    purchase_date: NaiveDate,
    expiration_date: NaiveDate,
    lead_days: i64,
) -> Option<NaiveDate> {
    expiration_date
        .checked_sub_signed(Duration::days(lead_days))
        .map(|date| date.max(purchase_date))
}

#[derive(Debug, Clone)]
pub struct CreateIngredientParams {
    pub user_id: i32,
    pub ingredient_name: String,
    pub category_id: i32,
    pub purchase_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub alert_date: NaiveDate,
}
