//! SeaORM entities for the foodthing schema.

pub mod prelude;

pub mod board;
pub mod board_comment;
pub mod board_image;
pub mod board_like;
pub mod expiration_alert;
pub mod food_ranking;
pub mod ingredient;
pub mod ingredient_category;
pub mod like_recipe;
pub mod sea_orm_active_enums;
pub mod user;
