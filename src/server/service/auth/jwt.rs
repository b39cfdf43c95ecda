use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{config::Config, error::auth::AuthError};

/// Access token claims. `sub` carries the account email.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and checks HS256 bearer tokens.
pub struct JwtService<'a> {
    secret: &'a str,
    expire_hours: i64,
}

impl<'a> JwtService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            secret: &config.jwt_secret_key,
            expire_hours: config.jwt_expire_hours,
        }
    }

    /// Creates a token for `email` valid for the configured number of hours.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AuthError::TokenEncode)` - Signing failed
    pub fn create(&self, email: &str) -> Result<String, AuthError> {
        self.create_with_lifetime(email, Duration::hours(self.expire_hours))
    }

    fn create_with_lifetime(&self, email: &str, lifetime: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Decodes a token and returns the email it was issued for.
    ///
    /// # Returns
    /// - `Ok(String)` - Email from the `sub` claim
    /// - `Err(AuthError::TokenExpired)` - Bad signature, malformed or expired token
    pub fn decode(&self, token: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            AuthError::TokenExpired
        })?;

        Ok(data.claims.sub)
    }
}
