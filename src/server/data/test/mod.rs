mod board;
mod board_comment;
mod expiration_alert;
mod food_ranking;
mod ingredient;
mod like_recipe;
mod user;
