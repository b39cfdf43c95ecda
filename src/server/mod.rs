//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework, SeaORM for database operations, object
//! storage for board images and reqwest for OAuth providers and language model endpoints.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, storage, etc.)
//! - **Startup** (`startup`) - Initialization of database, HTTP client and storage
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the caller from the bearer token when the route needs one
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod test_support;

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Builds the complete application: API routes, CORS, request tracing and, when images are
/// kept on the local filesystem, the `/uploads` file server.
///
/// # Returns
/// - `Ok(Router)` - Application ready to be served
/// - `Err(ConfigError::InvalidEnvVar)` - `FRONTEND_URL` is not a valid origin
pub fn app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let origin = config
        .frontend_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            value: config.frontend_url.clone(),
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = router::router();

    if config.storage.aws_bucket_name.is_none() {
        router = router.nest_service("/uploads", ServeDir::new(&config.storage.upload_dir));
    }

    Ok(router
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
