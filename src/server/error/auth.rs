use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable `Authorization: Bearer` header, or the account is inactive.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Not authenticated")]
    Unauthorized,

    /// Bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token is invalid or expired")]
    TokenExpired,

    /// Token subject does not match any stored user.
    ///
    /// Results in a 404 Not Found response.
    #[error("User not found")]
    UserNotFound(String),

    /// Password hashing backend failure.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Token signing failure.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Failed to sign token: {0}")]
    TokenEncode(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => {
                error_response(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", self.to_string())
            }
            Self::TokenExpired => {
                error_response(StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED", self.to_string())
            }
            Self::UserNotFound(ref email) => {
                tracing::debug!("Token subject {} has no matching user", email);
                error_response(StatusCode::NOT_FOUND, "USER_NOT_FOUND", self.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
