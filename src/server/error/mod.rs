//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps the domain errors and implements `IntoResponse`, so every failing endpoint answers
//! with an `ErrorDto { code, detail }` body and the matching status code.

pub mod auth;
pub mod board;
pub mod config;
pub mod ingredient;
pub mod recipe;
pub mod social;
pub mod user;

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, board::BoardError, config::ConfigError, ingredient::IngredientError,
        recipe::RecipeError, social::SocialError, user::UserError,
    },
};

/// Top-level application error type.
///
/// Domain errors render their own status and code. Infrastructure failures are logged and
/// rendered as a generic 500 so implementation details never reach the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure (missing or invalid bearer token).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    UserErr(#[from] UserError),

    #[error(transparent)]
    SocialErr(#[from] SocialError),

    #[error(transparent)]
    BoardErr(#[from] BoardError),

    #[error(transparent)]
    IngredientErr(#[from] IngredientError),

    #[error(transparent)]
    RecipeErr(#[from] RecipeError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Object storage failure while uploading or deleting an image.
    ///
    /// Results in 500 with the `STORAGE_ERROR` code.
    #[error(transparent)]
    StorageErr(#[from] object_store::Error),

    /// JSON (de)serialization failure on stored data.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Request body failed validation.
    ///
    /// Results in 422 Unprocessable Entity with the `VALIDATION_ERROR` code.
    #[error("{0}")]
    Validation(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Builds the JSON error response shared by every error type.
///
/// # Arguments
/// - `status` - HTTP status code of the response
/// - `code` - Machine readable error code
/// - `detail` - Human readable message
pub fn error_response(status: StatusCode, code: &str, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            code: code.to_string(),
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::UserErr(err) => err.into_response(),
            Self::SocialErr(err) => err.into_response(),
            Self::BoardErr(err) => err.into_response(),
            Self::IngredientErr(err) => err.into_response(),
            Self::RecipeErr(err) => err.into_response(),
            Self::Validation(msg) => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg)
            }
            Self::StorageErr(err) => {
                tracing::error!("Storage error: {}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Failed to store image",
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "UNHANDLED_ERROR",
            "Internal server error",
        )
    }
}
