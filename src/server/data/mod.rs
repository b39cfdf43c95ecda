//! Database repository layer for all domain entities.
//!
//! Repositories handle the CRUD queries for each domain. They use SeaORM entity models
//! internally and return domain models, keeping the data layer separate from business
//! logic. Operations that touch several rows run inside a single transaction.

pub mod board;
pub mod board_comment;
pub mod expiration_alert;
pub mod food_ranking;
pub mod ingredient;
pub mod ingredient_category;
pub mod like_recipe;
pub mod user;

#[cfg(test)]
mod test;
