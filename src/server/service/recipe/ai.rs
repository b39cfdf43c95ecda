//! Language model client with a local-first provider chain.
//!
//! A local Ollama server is tried first when one is configured and answers its tag listing.
//! Any transport failure or non-success status on the local side falls through to the
//! OpenAI-compatible cloud endpoint. The reply text is reduced to its JSON payload and tagged
//! with the provider that produced it.

use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use serde_json::{json, Map, Value};

use crate::server::{
    config::AiConfig,
    error::{recipe::RecipeError, AppError},
    model::recipe::{AiProvider, AI_PROVIDER_KEY},
};

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const OLLAMA_CHAT_TIMEOUT: Duration = Duration::from_secs(50);
const OPENAI_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a failed Ollama chat.
enum OllamaFailure {
    /// The cloud provider should be tried instead.
    Fallback(String),
    /// Ollama answered but the reply is unusable.
    Final(AppError),
}

static FENCED_JSON_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]+?)\s*```"));

pub struct RecipeAiClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a AiConfig,
}

impl<'a> RecipeAiClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a AiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Sends `prompt` through the provider chain and returns the parsed JSON reply.
    ///
    /// # Returns
    /// - `Ok(Value)` - JSON object carrying `_ai_provider`
    /// - `Err(RecipeError::NullResponse)` - Model answered with empty text
    /// - `Err(RecipeError::JsonDecode)` - Reply is not JSON
    /// - `Err(RecipeError::Service)` - Cloud provider unavailable or not configured
    pub async fn generate(&self, prompt: &str) -> Result<Value, AppError> {
        let (Some(base_url), Some(model)) =
            (&self.config.ollama_url, &self.config.ollama_model_name)
        else {
            return self.call_openai(prompt).await;
        };

        let base_url = base_url.trim_end_matches('/');

        if let Err(reason) = self.probe_ollama(base_url).await {
            tracing::warn!("Ollama unavailable ({}), falling back to OpenAI", reason);
            return self.call_openai(prompt).await;
        }

        match self.call_ollama(base_url, model, prompt).await {
            Ok(text) => finish(&text, AiProvider::Ollama),
            Err(OllamaFailure::Fallback(reason)) => {
                tracing::warn!("Ollama chat failed ({}), falling back to OpenAI", reason);
                self.call_openai(prompt).await
            }
            Err(OllamaFailure::Final(error)) => Err(error),
        }
    }

    async fn probe_ollama(&self, base_url: &str) -> Result<(), String> {
        let response = self
            .http_client
            .get(format!("{}/api/tags", base_url))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("tags answered {}", response.status()));
        }

        Ok(())
    }

    /// Runs a non-streaming chat against Ollama.
    ///
    /// Transport failures and non-success statuses are returned as `Fallback`. A success
    /// status with an unreadable body is `Final`.
    async fn call_ollama(
        &self,
        base_url: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, OllamaFailure> {
        let payload = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "stream": false,
            "options": {"num_predict": self.config.num_predict},
        });

        let response = self
            .http_client
            .post(format!("{}/api/chat", base_url))
            .timeout(OLLAMA_CHAT_TIMEOUT)
            .json(&payload)
            .send()
            .await
            .map_err(|e| OllamaFailure::Fallback(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaFailure::Fallback(format!(
                "chat answered {} - {}",
                status, body
            )));
        }

        let body = response.json::<Value>().await.map_err(|e| {
            OllamaFailure::Final(
                RecipeError::JsonDecode(format!("Ollama reply is not JSON: {}", e)).into(),
            )
        })?;
        tracing::debug!(
            "Ollama reply keys: {:?}",
            body.as_object().map(|o| o.keys().collect::<Vec<_>>())
        );

        let text = body
            .pointer("/message/content")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .or_else(|| choice_text(&body))
            .unwrap_or_default();

        Ok(text.to_string())
    }

    async fn call_openai(&self, prompt: &str) -> Result<Value, AppError> {
        let Some(api_key) = &self.config.openai_api_key else {
            return Err(
                RecipeError::Service("OpenAI API key is not configured".to_string()).into(),
            );
        };

        let payload = json!({
            "model": self.config.openai_model_name,
            "messages": [{"role": "user", "content": prompt}],
            "stream": false,
            "max_tokens": self.config.num_predict,
        });

        let response = self
            .http_client
            .post(format!(
                "{}/v1/chat/completions",
                self.config.openai_base_url.trim_end_matches('/')
            ))
            .timeout(OPENAI_TIMEOUT)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RecipeError::Service(format!("OpenAI network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecipeError::Service(format!(
                "OpenAI request failed: {} - {}",
                status, body
            ))
            .into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| RecipeError::JsonDecode(format!("OpenAI reply is not JSON: {}", e)))?;

        let text = choice_text(&body).unwrap_or_default();

        finish(text, AiProvider::OpenAi)
    }
}

fn choice_text(body: &Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Turns model text into a tagged JSON value.
fn finish(text: &str, provider: AiProvider) -> Result<Value, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RecipeError::NullResponse.into());
    }

    let parsed = parse_reply(text)?;

    Ok(tag_provider(parsed, provider))
}

/// Parses the reply, preferring the contents of a fenced `json` block when present.
fn parse_reply(text: &str) -> Result<Value, AppError> {
    let re = FENCED_JSON_RE
        .as_ref()
        .map_err(|e| AppError::InternalError(format!("Invalid fence pattern: {}", e)))?;

    let json_text = re
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str().trim())
        .unwrap_or(text);

    serde_json::from_str(json_text)
        .map_err(|e| RecipeError::JsonDecode(format!("{}: {}", e, text)).into())
}

/// Stamps `_ai_provider` unless the model already set it; non-objects are wrapped.
fn tag_provider(parsed: Value, provider: AiProvider) -> Value {
    match parsed {
        Value::Object(mut map) => {
            map.entry(AI_PROVIDER_KEY)
                .or_insert_with(|| Value::String(provider.as_str().to_string()));
            Value::Object(map)
        }
        other => {
            let mut map = Map::new();
            map.insert(
                AI_PROVIDER_KEY.to_string(),
                Value::String(provider.as_str().to_string()),
            );
            map.insert("data".to_string(), other);
            Value::Object(map)
        }
    }
}

#[cfg(test)]
mod test;
