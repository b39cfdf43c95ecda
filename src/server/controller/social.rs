use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, user::AuthUrlDto},
    server::{
        error::{social::SocialError, AppError},
        model::social::SocialProvider,
        service::social::SocialAuthService,
        state::AppState,
    },
};

pub static SOCIAL_TAG: &str = "social";

/// Query string the provider appends when redirecting back.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// GET /social/{provider} - Get the provider consent URL
///
/// Issues a fresh CSRF state valid for five minutes and embeds it in the returned URL.
///
/// # Returns
/// - `200 OK`: `{auth_url}` to navigate to
/// - `404 Not Found`: Unsupported provider
#[utoipa::path(
    get,
    path = "/social/{provider}",
    tag = SOCIAL_TAG,
    params(
        ("provider" = String, Path, description = "One of google, naver or kakao")
    ),
    responses(
        (status = 200, description = "Provider authorization URL", body = AuthUrlDto),
        (status = 404, description = "Unknown provider", body = ErrorDto),
        (status = 500, description = "Provider misconfigured", body = ErrorDto)
    ),
)]
pub async fn auth_url(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let provider = provider.parse::<SocialProvider>()?;

    let auth_url = SocialAuthService::new(
        &state.db,
        &state.http_client,
        &state.config,
        &state.state_store,
    )
    .auth_url(provider)
    .await?;

    Ok((StatusCode::OK, Json(AuthUrlDto { auth_url })))
}

/// GET /social/{provider}/callback - Complete a social login
///
/// Consumes the state, exchanges the code, then logs the provider account in (signing it up
/// on first use) and redirects to the frontend with a token.
///
/// # Returns
/// - `303 See Other`: Redirect to `{FRONTEND_URL}/auth/success?token=<jwt>`
/// - `400 Bad Request`: Invalid state, token exchange or profile failure
/// - `401 Unauthorized`: Linked account was withdrawn
/// - `409 Conflict`: Provider email belongs to another account
#[utoipa::path(
    get,
    path = "/social/{provider}/callback",
    tag = SOCIAL_TAG,
    params(
        ("provider" = String, Path, description = "One of google, naver or kakao"),
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("state" = Option<String>, Query, description = "CSRF state issued with the consent URL")
    ),
    responses(
        (status = 303, description = "Redirect to the frontend with a token"),
        (status = 400, description = "State, token or profile failure", body = ErrorDto),
        (status = 401, description = "Account withdrawn", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Account creation failed", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let provider = provider.parse::<SocialProvider>()?;

    let csrf_state = params.state.ok_or(SocialError::InvalidState)?;
    let code = params
        .code
        .ok_or_else(|| SocialError::TokenError("Missing authorization code".to_string()))?;

    let redirect_url = SocialAuthService::new(
        &state.db,
        &state.http_client,
        &state.config,
        &state.state_store,
    )
    .callback(provider, &code, &csrf_state)
    .await?;

    Ok(Redirect::to(&redirect_url))
}
