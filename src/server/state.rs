//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool
//! - `reqwest::Client` wraps an `Arc`
//! - `Config` sits behind an `Arc`
//! - `SocialStateStore` and `ImageStorage` share their inner state through `Arc`

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{social::state_store::SocialStateStore, storage::ImageStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for OAuth providers and language model endpoints.
    ///
    /// Configured without redirect following.
    pub http_client: reqwest::Client,

    pub config: Arc<Config>,

    /// Pending OAuth states, consumed by the social callback.
    pub state_store: SocialStateStore,

    /// Object storage for board images.
    pub storage: ImageStorage,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        config: Config,
        state_store: SocialStateStore,
        storage: ImageStorage,
    ) -> Self {
        Self {
            db,
            http_client,
            config: Arc::new(config),
            state_store,
            storage,
        }
    }
}
