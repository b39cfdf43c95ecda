use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Request for a detailed recipe of a chosen dish.
///
/// Both fields are checked by the recipe service rather than the deserializer, so a
/// malformed value yields `INVALID_AI_REQUEST`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct CookDto {
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub use_ingredients: Option<Value>,
}

/// Free-text prompt from the user.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct ChatDto {
    #[serde(default)]
    pub chat: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SaveRecipeDto {
    #[schema(value_type = Object)]
    pub recipe: Value,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SavedRecipeDto {
    pub id: i32,
    #[schema(value_type = Object)]
    pub recipe: Value,
    pub status: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SavedRecipeItemDto {
    pub id: i32,
    #[schema(value_type = Object)]
    pub recipe: Value,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct FoodRankingDto {
    pub food_name: String,
    pub count: i32,
}
