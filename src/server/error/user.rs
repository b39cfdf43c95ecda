use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Email is already in use")]
    EmailConflict,

    #[error("Nickname is already in use")]
    NicknameConflict,

    #[error("Phone number is already in use")]
    PhoneNumConflict,

    /// Sign-up password and its confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Unknown email, wrong password or inactive account on log-in.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Wrong current password on password change.
    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("New password and confirmation do not match")]
    NewPasswordMismatch,

    #[error("New password must differ from the current password")]
    PasswordUnchanged,

    #[error("Password must be between 8 and 20 characters")]
    PasswordLength,

    #[error("User not found")]
    NotFound,
}

impl UserError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::EmailConflict => (StatusCode::CONFLICT, "EMAIL_CONFLICT"),
            Self::NicknameConflict => (StatusCode::CONFLICT, "NICKNAME_CONFLICT"),
            Self::PhoneNumConflict => (StatusCode::CONFLICT, "PHONE_NUM_CONFLICT"),
            Self::PasswordMismatch => (StatusCode::BAD_REQUEST, "PASSWORD_MISMATCH"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            Self::IncorrectPassword => (StatusCode::UNAUTHORIZED, "INCORRECT_PASSWORD"),
            Self::NewPasswordMismatch => (StatusCode::BAD_REQUEST, "NEW_PASSWORD_MISMATCH"),
            Self::PasswordUnchanged => (StatusCode::BAD_REQUEST, "PASSWORD_UNCHANGED"),
            Self::PasswordLength => (StatusCode::BAD_REQUEST, "PASSWORD_LENGTH"),
            Self::NotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        error_response(status, code, self.to_string())
    }
}
