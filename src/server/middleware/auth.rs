use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::jwt::JwtService,
};

/// Resolves the caller of a request from its bearer token.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            config,
            headers,
        }
    }

    /// Requires an active user behind `Authorization: Bearer <token>`.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated, active user
    /// - `Err(AuthError::Unauthorized)` - Header missing or not a bearer token, or account withdrawn
    /// - `Err(AuthError::TokenExpired)` - Token invalid or expired
    /// - `Err(AuthError::UserNotFound)` - Token subject has no account
    pub async fn require(&self) -> Result<User, AppError> {
        let token = self.bearer_token().ok_or(AuthError::Unauthorized)?;

        let email = JwtService::new(self.config).decode(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::UserNotFound(email).into());
        };

        if !user.is_active() {
            return Err(AuthError::Unauthorized.into());
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;

        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        Some(token.trim()).filter(|token| !token.is_empty())
    }
}
