use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use test_utils::mock::{unreachable_url, MockServer};

use crate::server::{
    config::AiConfig,
    error::{recipe::RecipeError, AppError},
    service::recipe::ai::RecipeAiClient,
};

mod fallback;

fn ai_config(ollama_url: Option<String>, openai_base_url: String) -> AiConfig {
    AiConfig {
        ollama_url,
        ollama_model_name: Some("llama3".to_string()),
        openai_api_key: Some("sk-test".to_string()),
        openai_model_name: "gpt-4o-mini".to_string(),
        openai_base_url,
        num_predict: 1000,
    }
}

/// Ollama imitation with a healthy tag listing.
fn ollama_router(chat_status: StatusCode, content: &str) -> Router {
    let body = json!({"model": "llama3", "message": {"role": "assistant", "content": content}});

    Router::new()
        .route("/api/tags", get(|| async { Json(json!({"models": []})) }))
        .route(
            "/api/chat",
            post(move || {
                let body = body.clone();
                async move { (chat_status, Json(body)) }
            }),
        )
}

/// OpenAI imitation answering chat completions.
fn openai_router(status: StatusCode, content: &str) -> Router {
    let body = json!({"choices": [{"message": {"role": "assistant", "content": content}}]});

    Router::new().route(
        "/v1/chat/completions",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

fn provider_of(value: &Value) -> Option<&str> {
    value.get("_ai_provider").and_then(Value::as_str)
}
