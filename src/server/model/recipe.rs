//! Recipe domain models.

use sea_orm::DbErr;
use serde_json::Value;

use crate::model::recipe::{FoodRankingDto, SavedRecipeDto, SavedRecipeItemDto};

/// Key the recipe service stamps on model output to name the provider that produced it.
pub const AI_PROVIDER_KEY: &str = "_ai_provider";

/// Backend that produced a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    Ollama,
    OpenAi,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OpenAi => "openai",
        }
    }
}

/// Recipe a user saved, with its JSON decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedRecipe {
    pub id: i32,
    pub user_id: i32,
    pub recipe: Value,
    pub status: bool,
}

impl SavedRecipe {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SavedRecipe)` - Row with its recipe decoded
    /// - `Err(DbErr::Custom)` - Stored recipe text is not valid JSON
    pub fn from_entity(entity: entity::like_recipe::Model) -> Result<Self, DbErr> {
        let recipe = serde_json::from_str(&entity.recipe).map_err(|e| {
            DbErr::Custom(format!(
                "Failed to decode saved recipe {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            recipe,
            status: entity.status,
        })
    }

    pub fn into_dto(self) -> SavedRecipeDto {
        SavedRecipeDto {
            id: self.id,
            recipe: self.recipe,
            status: self.status,
        }
    }

    pub fn into_item_dto(self) -> SavedRecipeItemDto {
        SavedRecipeItemDto {
            id: self.id,
            recipe: self.recipe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRank {
    pub food_name: String,
    pub count: i32,
}

impl FoodRank {
    pub fn from_entity(entity: entity::food_ranking::Model) -> Self {
        Self {
            food_name: entity.food_name,
            count: entity.count,
        }
    }

    pub fn into_dto(self) -> FoodRankingDto {
        FoodRankingDto {
            food_name: self.food_name,
            count: self.count,
        }
    }
}
