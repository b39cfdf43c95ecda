//! AI recipe generation, saved recipes and the dish ranking.

pub mod ai;
pub mod prompt;

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    model::recipe::CookDto,
    server::{
        config::AiConfig,
        data::{food_ranking::FoodRankingRepository, like_recipe::LikeRecipeRepository},
        error::{recipe::RecipeError, AppError},
        model::recipe::{FoodRank, SavedRecipe, AI_PROVIDER_KEY},
        service::recipe::ai::RecipeAiClient,
    },
};

const CHAT_MAX: usize = 200;
const RANKING_MAX: u64 = 100;

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
    ai: RecipeAiClient<'a>,
}

impl<'a> RecipeService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a AiConfig,
    ) -> Self {
        Self {
            db,
            ai: RecipeAiClient::new(http_client, config),
        }
    }

    /// Suggests dishes from the user's registered ingredients.
    ///
    /// # Returns
    /// - `Ok(Value)` - Model reply, normally `{recipes: [...]}`
    /// - `Err(RecipeError::InvalidRequest)` - User has no ingredients
    pub async fn suggest(&self, user_id: i32) -> Result<Value, AppError> {
        let names = crate::server::data::ingredient::IngredientRepository::new(self.db)
            .get_names_by_user(user_id)
            .await?;

        if names.is_empty() {
            return Err(RecipeError::InvalidRequest(
                "Register ingredients before asking for suggestions".to_string(),
            )
            .into());
        }

        self.ai.generate(&prompt::suggestion(&names)).await
    }

    /// Detailed recipe for a chosen dish.
    ///
    /// A missing `use_ingredients` is treated as an empty list.
    ///
    /// # Returns
    /// - `Ok(Value)` - Model reply
    /// - `Err(RecipeError::InvalidRequest)` - `food` blank or `use_ingredients` not an array
    pub async fn cook(&self, dto: CookDto) -> Result<Value, AppError> {
        let food = dto
            .food
            .as_deref()
            .map(str::trim)
            .filter(|food| !food.is_empty());

        let use_ingredients = match dto.use_ingredients {
            None | Some(Value::Null) => Some(Vec::new()),
            Some(Value::Array(values)) => Some(prompt::ingredient_names(&values)),
            Some(_) => None,
        };

        let (Some(food), Some(use_ingredients)) = (food, use_ingredients) else {
            return Err(RecipeError::InvalidRequest(
                "Provide a valid 'food' and 'use_ingredients'".to_string(),
            )
            .into());
        };

        self.ai
            .generate(&prompt::recipe(food, &use_ingredients))
            .await
    }

    /// Quick recipe from ingredients typed as free text.
    pub async fn ingredient_cook(&self, chat: &str) -> Result<Value, AppError> {
        let chat = validate_chat(chat)?;

        self.ai.generate(&prompt::quick(chat)).await
    }

    /// Recipe for a dish the user named, counted in the ranking.
    pub async fn food_cook(&self, chat: &str) -> Result<Value, AppError> {
        let chat = validate_chat(chat)?;

        let reply = self.ai.generate(&prompt::search(chat)).await?;

        FoodRankingRepository::new(self.db).increment(chat).await?;

        Ok(reply)
    }

    /// Saves a recipe for the user and counts its dish in the ranking.
    ///
    /// The provider tag added during generation is not stored.
    ///
    /// # Returns
    /// - `Ok(SavedRecipe)` - Stored recipe
    /// - `Err(AppError::Validation)` - Recipe is not a JSON object
    pub async fn save(&self, user_id: i32, recipe: Value) -> Result<SavedRecipe, AppError> {
        let Value::Object(mut recipe) = recipe else {
            return Err(AppError::Validation(
                "recipe must be a JSON object".to_string(),
            ));
        };
        recipe.remove(AI_PROVIDER_KEY);

        let food = recipe
            .get("food")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|food| !food.is_empty())
            .map(str::to_string);

        let recipe = Value::Object(recipe);
        let saved = LikeRecipeRepository::new(self.db)
            .create(user_id, &recipe)
            .await?;

        if let Some(food) = food {
            FoodRankingRepository::new(self.db).increment(&food).await?;
        }

        Ok(saved)
    }

    pub async fn saved(&self, user_id: i32) -> Result<Vec<SavedRecipe>, AppError> {
        let recipes = LikeRecipeRepository::new(self.db)
            .get_visible_by_user(user_id)
            .await?;

        Ok(recipes)
    }

    pub async fn unsave(&self, user_id: i32, recipe_id: i32) -> Result<(), AppError> {
        let hidden = LikeRecipeRepository::new(self.db)
            .soft_delete(recipe_id, user_id)
            .await?;

        if !hidden {
            return Err(RecipeError::NotFound(recipe_id).into());
        }

        Ok(())
    }

    /// Most requested dishes. `limit` is clamped to 1..=100.
    pub async fn ranking(&self, limit: u64) -> Result<Vec<FoodRank>, AppError> {
        let ranks = FoodRankingRepository::new(self.db)
            .top(limit.clamp(1, RANKING_MAX))
            .await?;

        Ok(ranks)
    }
}

fn validate_chat(chat: &str) -> Result<&str, AppError> {
    let chat = chat.trim();
    let len = chat.chars().count();

    if len == 0 || len > CHAT_MAX {
        return Err(RecipeError::InvalidRequest(format!(
            "chat must be between 1 and {} characters",
            CHAT_MAX
        ))
        .into());
    }

    Ok(chat)
}
