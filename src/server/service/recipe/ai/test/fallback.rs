use super::*;

/// Tests a healthy local model.
///
/// Expected: reply tagged with ollama
#[tokio::test]
async fn uses_ollama_when_available() -> Result<(), AppError> {
    let ollama = MockServer::spawn(ollama_router(StatusCode::OK, r#"{"food": "omelette"}"#))
        .await
        .unwrap();
    let openai = MockServer::spawn(openai_router(StatusCode::OK, r#"{"food": "cloud"}"#))
        .await
        .unwrap();
    let config = ai_config(Some(ollama.base_url.clone()), openai.base_url.clone());
    let http_client = reqwest::Client::new();

    let reply = RecipeAiClient::new(&http_client, &config)
        .generate("prompt")
        .await?;

    assert_eq!(reply["food"], "omelette");
    assert_eq!(provider_of(&reply), Some("ollama"));

    Ok(())
}

/// Tests a local model that cannot be reached.
///
/// Expected: reply from the cloud tagged with openai
#[tokio::test]
async fn falls_back_when_ollama_unreachable() -> Result<(), AppError> {
    let openai = MockServer::spawn(openai_router(StatusCode::OK, r#"{"food": "bibimbap"}"#))
        .await
        .unwrap();
    let config = ai_config(Some(unreachable_url().await.unwrap()), openai.base_url.clone());
    let http_client = reqwest::Client::new();

    let reply = RecipeAiClient::new(&http_client, &config)
        .generate("prompt")
        .await?;

    assert_eq!(reply["food"], "bibimbap");
    assert_eq!(provider_of(&reply), Some("openai"));

    Ok(())
}

/// Tests a local model whose chat endpoint fails.
///
/// Expected: reply from the cloud tagged with openai
#[tokio::test]
async fn falls_back_when_ollama_chat_fails() -> Result<(), AppError> {
    let ollama = MockServer::spawn(ollama_router(StatusCode::INTERNAL_SERVER_ERROR, ""))
        .await
        .unwrap();
    let openai = MockServer::spawn(openai_router(StatusCode::OK, r#"{"food": "ramen"}"#))
        .await
        .unwrap();
    let config = ai_config(Some(ollama.base_url.clone()), openai.base_url.clone());
    let http_client = reqwest::Client::new();

    let reply = RecipeAiClient::new(&http_client, &config)
        .generate("prompt")
        .await?;

    assert_eq!(provider_of(&reply), Some("openai"));

    Ok(())
}

/// Tests skipping the local model when it is not configured.
///
/// Expected: reply from the cloud
#[tokio::test]
async fn uses_cloud_without_ollama_config() -> Result<(), AppError> {
    let openai = MockServer::spawn(openai_router(StatusCode::OK, r#"{"food": "curry"}"#))
        .await
        .unwrap();
    let config = ai_config(None, openai.base_url.clone());
    let http_client = reqwest::Client::new();

    let reply = RecipeAiClient::new(&http_client, &config)
        .generate("prompt")
        .await?;

    assert_eq!(provider_of(&reply), Some("openai"));

    Ok(())
}

/// Tests the cloud fallback without an API key.
///
/// Expected: Err(Service) naming the missing key
#[tokio::test]
async fn fails_without_api_key() -> Result<(), AppError> {
    let mut config = ai_config(None, unreachable_url().await.unwrap());
    config.openai_api_key = None;
    let http_client = reqwest::Client::new();

    let result = RecipeAiClient::new(&http_client, &config)
        .generate("prompt")
        .await;

    assert!(matches!(
        result,
        Err(AppError::RecipeErr(RecipeError::Service(ref detail))) if detail.contains("API key")
    ));

    Ok(())
}

/// Tests a cloud endpoint that answers with an error status.
///
/// Expected: Err(Service) with the status in the detail
#[tokio::test]
async fn reports_cloud_error_status() -> Result<(), AppError> {
    let openai = MockServer::spawn(openai_router(StatusCode::TOO_MANY_REQUESTS, ""))
        .await
        .unwrap();
    let config = ai_config(None, openai.base_url.clone());
    let http_client = reqwest::Client::new();

    let result = RecipeAiClient::new(&http_client, &config)
        .generate("prompt")
        .await;

    assert!(matches!(
        result,
        Err(AppError::RecipeErr(RecipeError::Service(ref detail))) if detail.contains("429")
    ));

    Ok(())
}

/// Tests an unreachable cloud endpoint.
///
/// Expected: Err(Service) reporting a network error
#[tokio::test]
async fn reports_cloud_network_error() -> Result<(), AppError> {
    let config = ai_config(None, unreachable_url().await.unwrap());
    let http_client = reqwest::Client::new();

    let result = RecipeAiClient::new(&http_client, &config)
        .generate("prompt")
        .await;

    assert!(matches!(
        result,
        Err(AppError::RecipeErr(RecipeError::Service(ref detail))) if detail.contains("network")
    ));

    Ok(())
}
