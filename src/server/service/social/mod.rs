//! Social login through Google, Naver and Kakao.
//!
//! The flow is session free. `auth_url` stores a one-time state in `SocialStateStore` and
//! hands back the provider consent URL. `callback` consumes that state, trades the code for
//! an access token, reads the profile and either logs in the linked account or creates one.
//! The result is a redirect to the frontend carrying our own access token.

pub mod profile;
pub mod state_store;
pub mod token;

use chrono::NaiveDate;
use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, Client, ClientId, ClientSecret, CsrfToken,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    config::{Config, OAuthProviderConfig},
    data::user::UserRepository,
    error::{auth::AuthError, social::SocialError, user::UserError, AppError},
    model::{
        social::{SocialProfile, SocialProvider},
        user::{CreateUserParams, User},
    },
    service::{
        auth::{jwt::JwtService, password::hash_password},
        social::{
            profile::parse_profile,
            state_store::{random_string, SocialStateStore},
            token::ProviderClient,
        },
    },
};

/// Birth date stored when the provider does not share one.
const DEFAULT_BIRTH: (i32, u32, u32) = (2000, 1, 1);

pub struct SocialAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
    state_store: &'a SocialStateStore,
}

impl<'a> SocialAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a Config,
        state_store: &'a SocialStateStore,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
            state_store,
        }
    }

    fn provider_config(&self, provider: SocialProvider) -> &'a OAuthProviderConfig {
        match provider {
            SocialProvider::Google => &self.config.google,
            SocialProvider::Naver => &self.config.naver,
            SocialProvider::Kakao => &self.config.kakao,
        }
    }

    /// OAuth2 client for `provider`, sending credentials in the request body as Naver and
    /// Kakao require.
    fn oauth_client(&self, provider: SocialProvider) -> Result<ProviderClient, AppError> {
        let provider_config = self.provider_config(provider);

        let auth_url = AuthUrl::new(provider_config.auth_url.clone()).map_err(|e| {
            AppError::InternalError(format!("Invalid {} auth URL: {}", provider, e))
        })?;
        let token_url = TokenUrl::new(provider_config.token_url.clone()).map_err(|e| {
            AppError::InternalError(format!("Invalid {} token URL: {}", provider, e))
        })?;
        let redirect_url = RedirectUrl::new(provider_config.redirect_uri.clone()).map_err(|e| {
            AppError::InternalError(format!("Invalid {} redirect URI: {}", provider, e))
        })?;

        let client: ProviderClient = Client::new(ClientId::new(provider_config.client_id.clone()))
            .set_client_secret(ClientSecret::new(provider_config.client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url)
            .set_auth_type(AuthType::RequestBody);

        Ok(client)
    }

    /// Builds the consent URL for `provider` and records its state.
    ///
    /// # Returns
    /// - `Ok(String)` - Provider authorization URL including `state`
    /// - `Err(AppError::InternalError)` - A configured provider URL is malformed
    pub async fn auth_url(&self, provider: SocialProvider) -> Result<String, AppError> {
        let client = self.oauth_client(provider)?;

        let state = self.state_store.issue(provider).await;

        let (url, _) = client
            .authorize_url(|| CsrfToken::new(state))
            .add_scopes(
                provider
                    .scopes()
                    .iter()
                    .map(|scope| Scope::new(scope.to_string())),
            )
            .url();

        Ok(url.to_string())
    }

    /// Completes the provider redirect and returns the frontend URL to send the user to.
    ///
    /// # Returns
    /// - `Ok(String)` - `{FRONTEND_URL}/auth/success?token=<jwt>`
    /// - `Err(SocialError::InvalidState)` - State unknown, reused or expired
    /// - `Err(SocialError::TokenError)` - Code exchange failed
    /// - `Err(SocialError::UserInfoError)` - Profile request failed or had no id
    /// - `Err(AuthError::Unauthorized)` - Linked account was withdrawn
    /// - `Err(UserError::EmailConflict)` - Profile email belongs to another account
    /// - `Err(SocialError::SignupError)` - Account creation failed
    pub async fn callback(
        &self,
        provider: SocialProvider,
        code: &str,
        state: &str,
    ) -> Result<String, AppError> {
        if !self.state_store.consume(provider, state).await {
            return Err(SocialError::InvalidState.into());
        }

        let access_token = self.exchange_code(provider, code, state).await?;
        let body = self.fetch_user_info(provider, &access_token).await?;
        let profile = parse_profile(provider, &body)?;

        let user = self.login_or_signup(profile).await?;
        let token = JwtService::new(self.config).create(&user.email)?;

        tracing::info!("User {} logged in with {}", user.id, provider);

        Ok(format!(
            "{}/auth/success?token={}",
            self.config.frontend_url.trim_end_matches('/'),
            token
        ))
    }

    async fn exchange_code(
        &self,
        provider: SocialProvider,
        code: &str,
        state: &str,
    ) -> Result<String, AppError> {
        let token = self
            .oauth_client(provider)?
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .add_extra_param("state", state)
            .request_async(self.http_client)
            .await
            .map_err(|e| {
                SocialError::TokenError(format!("{} token exchange failed: {}", provider, e))
            })?;

        Ok(token.access_token().secret().to_string())
    }

    async fn fetch_user_info(
        &self,
        provider: SocialProvider,
        access_token: &str,
    ) -> Result<Value, AppError> {
        let provider_config = self.provider_config(provider);

        let response = self
            .http_client
            .get(&provider_config.user_info_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| SocialError::UserInfoError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SocialError::UserInfoError(format!(
                "{} user info endpoint answered {}",
                provider,
                response.status()
            ))
            .into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| SocialError::UserInfoError(e.to_string()))?;

        Ok(body)
    }

    /// Returns the account linked to the profile, creating it on first login.
    pub async fn login_or_signup(&self, profile: SocialProfile) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let social_auth = profile.provider.social_auth();

        if let Some(user) = user_repo
            .find_by_social(social_auth, &profile.social_id)
            .await?
        {
            if !user.is_active() {
                return Err(AuthError::Unauthorized.into());
            }
            return Ok(user);
        }

        let email = profile.account_email();
        if user_repo.email_exists(&email).await? {
            return Err(UserError::EmailConflict.into());
        }

        let (year, month, day) = DEFAULT_BIRTH;
        let birth = profile
            .birth
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(|| AppError::InternalError("Invalid default birth date".to_string()))?;

        let password_hash =
            hash_password(&random_string(32)).map_err(|e| SocialError::SignupError(e.to_string()))?;

        let user = user_repo
            .create(CreateUserParams {
                email,
                password_hash,
                name: profile.display_name(),
                nickname: profile.nickname(),
                birth,
                gender: profile.gender,
                phone_digest: None,
                social_auth,
                social_id: Some(profile.social_id.clone()),
            })
            .await
            .map_err(|e| SocialError::SignupError(e.to_string()))?;

        tracing::info!(
            "Created {} account {} for social id {}",
            profile.provider,
            user.id,
            profile.social_id
        );

        Ok(user)
    }
}

#[cfg(test)]
mod test;
