use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum IngredientError {
    #[error("Category not found")]
    CategoryNotFound(i32),

    /// Ingredient missing or owned by another user.
    #[error("Ingredient not found")]
    NotFound(i32),

    #[error("Alert not found")]
    AlertNotFound(i32),
}

impl IntoResponse for IngredientError {
    fn into_response(self) -> Response {
        let code = match self {
            Self::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            Self::NotFound(_) => "INGREDIENT_NOT_FOUND",
            Self::AlertNotFound(_) => "ALERT_NOT_FOUND",
        };

        error_response(StatusCode::NOT_FOUND, code, self.to_string())
    }
}
