use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RecipeError {
    /// Model answered with empty content.
    #[error("AI returned an empty response")]
    NullResponse,

    /// Model output could not be parsed as JSON.
    #[error("Failed to parse AI response: {0}")]
    JsonDecode(String),

    /// No provider could serve the prompt.
    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Recipe not found")]
    NotFound(i32),
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            Self::NullResponse => (StatusCode::BAD_GATEWAY, "AI_NULL_RESPONSE"),
            Self::JsonDecode(_) => (StatusCode::BAD_GATEWAY, "AI_JSON_DECODE_ERROR"),
            Self::Service(_) => (StatusCode::SERVICE_UNAVAILABLE, "AI_SERVICE_ERROR"),
            Self::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_AI_REQUEST"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "RECIPE_NOT_FOUND"),
        };

        if matches!(self, Self::Service(_) | Self::JsonDecode(_)) {
            tracing::warn!("{}", self);
        }

        error_response(status, code, self.to_string())
    }
}
