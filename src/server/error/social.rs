use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum SocialError {
    /// Path segment names no supported provider.
    #[error("Unknown social provider: {0}")]
    UnknownProvider(String),

    /// CSRF state missing, unknown or expired.
    #[error("Invalid or expired state")]
    InvalidState,

    /// Provider rejected the authorization code.
    ///
    /// Results in 400 Bad Request. The provider response is logged, not returned.
    #[error("Failed to obtain access token from provider")]
    TokenError(String),

    /// Provider profile request failed or lacked an id.
    #[error("Failed to fetch user information from provider")]
    UserInfoError(String),

    /// Persisting the new social account failed.
    #[error("Failed to create social account")]
    SignupError(String),
}

impl IntoResponse for SocialError {
    fn into_response(self) -> Response {
        match &self {
            Self::UnknownProvider(_) => {
                error_response(StatusCode::NOT_FOUND, "PROVIDER_NOT_FOUND", self.to_string())
            }
            Self::InvalidState => {
                error_response(StatusCode::BAD_REQUEST, "INVALID_STATE", self.to_string())
            }
            Self::TokenError(reason) => {
                tracing::warn!("Social token exchange failed: {}", reason);
                error_response(StatusCode::BAD_REQUEST, "SOCIAL_TOKEN_ERROR", self.to_string())
            }
            Self::UserInfoError(reason) => {
                tracing::warn!("Social profile request failed: {}", reason);
                error_response(
                    StatusCode::BAD_REQUEST,
                    "SOCIAL_USER_INFO_ERROR",
                    self.to_string(),
                )
            }
            Self::SignupError(reason) => {
                tracing::error!("Social sign-up failed: {}", reason);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SOCIAL_SIGNUP_ERROR",
                    self.to_string(),
                )
            }
        }
    }
}
