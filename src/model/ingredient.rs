use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateIngredientDto {
    pub ingredient_name: String,
    pub category_id: i32,
    pub purchase_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct IngredientDto {
    pub id: i32,
    pub ingredient_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub purchase_date: NaiveDate,
    pub expiration_date: NaiveDate,
    /// Days left until expiration, negative once expired.
    pub d_day: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct IngredientNamesDto {
    pub ingredient_list: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct IngredientListDto {
    pub ingredients: Vec<IngredientDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub expiration_days: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ExpirationAlertDto {
    pub id: i32,
    pub ingredient_id: i32,
    pub ingredient_name: String,
    pub alert_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub d_day: i64,
    pub is_read: bool,
}
