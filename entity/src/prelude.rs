pub use super::board::Entity as Board;
pub use super::board_comment::Entity as BoardComment;
pub use super::board_image::Entity as BoardImage;
pub use super::board_like::Entity as BoardLike;
pub use super::expiration_alert::Entity as ExpirationAlert;
pub use super::food_ranking::Entity as FoodRanking;
pub use super::ingredient::Entity as Ingredient;
pub use super::ingredient_category::Entity as IngredientCategory;
pub use super::like_recipe::Entity as LikeRecipe;
pub use super::user::Entity as User;
