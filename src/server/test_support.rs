//! Shared fixtures for unit and router tests.

use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::{AiConfig, Config, OAuthProviderConfig, StorageConfig},
    router::router,
    service::{social::state_store::SocialStateStore, storage::ImageStorage},
    state::AppState,
};

/// Port nothing listens on, so accidental outbound calls fail fast.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

fn provider(name: &str) -> OAuthProviderConfig {
    OAuthProviderConfig {
        client_id: format!("{}-client", name),
        client_secret: format!("{}-secret", name),
        redirect_uri: format!("http://localhost:8000/social/{}/callback", name),
        auth_url: format!("https://auth.{}.test/authorize", name),
        token_url: format!("{}/token", DEAD_ENDPOINT),
        user_info_url: format!("{}/me", DEAD_ENDPOINT),
    }
}

/// Configuration with test secrets and every external endpoint unreachable.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        app_url: "http://localhost:8000".to_string(),
        frontend_url: "http://localhost:3000".to_string(),
        jwt_secret_key: "test-secret".to_string(),
        jwt_expire_hours: 24,
        phone_pepper: "test-pepper".to_string(),
        google: provider("google"),
        naver: provider("naver"),
        kakao: provider("kakao"),
        ai: AiConfig {
            ollama_url: None,
            ollama_model_name: None,
            openai_api_key: None,
            openai_model_name: "gpt-4o-mini".to_string(),
            openai_base_url: DEAD_ENDPOINT.to_string(),
            num_predict: 1000,
        },
        storage: StorageConfig {
            aws_bucket_name: None,
            aws_region: "ap-northeast-2".to_string(),
            aws_access_key_id: None,
            aws_secret_access_key: None,
            upload_dir: "./uploads".to_string(),
        },
        expiration_alert_days: 2,
    }
}

/// State over `db` with in-memory image storage.
pub fn test_state(db: DatabaseConnection, config: Config) -> AppState {
    let storage = ImageStorage::in_memory(format!("{}/uploads", config.app_url));

    AppState::new(
        db,
        reqwest::Client::new(),
        config,
        SocialStateStore::new(),
        storage,
    )
}

/// HTTP test server running the full router over `state`.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router().with_state(state)).unwrap()
}
