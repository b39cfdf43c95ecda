use std::collections::HashMap;

use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use entity::sea_orm_active_enums::{SocialAuth, UserStatus};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory, mock::MockServer};

use crate::server::{
    config::Config,
    error::{auth::AuthError, social::SocialError, user::UserError, AppError},
    model::social::SocialProvider,
    service::social::{state_store::SocialStateStore, SocialAuthService},
    test_support::test_config,
};


/// Provider imitation answering the token and user-info endpoints.
///
/// The token endpoint expects an authorization code grant with the client credentials and
/// `state` in the form body, and answers in the Naver shape with a string lifetime. The
/// user-info endpoint only accepts the token handed out by the token endpoint.
fn provider_router(token_status: StatusCode, profile: Value) -> Router {
    Router::new()
        .route(
            "/token",
            post(move |Form(form): Form<HashMap<String, String>>| async move {
                let field = |key: &str| form.get(key).map(String::as_str).unwrap_or_default();
                let well_formed = field("grant_type") == "authorization_code"
                    && field("code") == "auth-code"
                    && field("client_id").ends_with("-client")
                    && field("client_secret").ends_with("-secret")
                    && !field("state").is_empty()
                    && field("redirect_uri").starts_with("http");

                if !token_status.is_success() || !well_formed {
                    let status = if well_formed { token_status } else { StatusCode::BAD_REQUEST };
                    return (status, Json(json!({"error": "invalid_grant"})));
                }

                (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": "mock-access-token",
                        "refresh_token": "mock-refresh-token",
                        "token_type": "bearer",
                        "expires_in": "3600",
                    })),
                )
            }),
        )
        .route(
            "/me",
            get(move |headers: HeaderMap| {
                let profile = profile.clone();
                async move {
                    let authorized = headers
                        .get("authorization")
                        .and_then(|value| value.to_str().ok())
                        == Some("Bearer mock-access-token");

                    if authorized {
                        (StatusCode::OK, Json(profile))
                    } else {
                        (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid_token"})))
                    }
                }
            }),
        )
}

/// Points every provider at `server`.
fn config_for(server: &MockServer) -> Config {
    let mut config = test_config();
    for provider in [&mut config.google, &mut config.naver, &mut config.kakao] {
        provider.token_url = server.url("/token");
        provider.user_info_url = server.url("/me");
    }
    config
}

fn google_profile() -> Value {
    json!({"id": "1093", "email": "cook@gmail.com", "name": "Cook"})
}
