use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USER_INFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

const NAVER_AUTH_URL: &str = "https://nid.naver.com/oauth2.0/authorize";
const NAVER_TOKEN_URL: &str = "https://nid.naver.com/oauth2.0/token";
const NAVER_USER_INFO_URL: &str = "https://openapi.naver.com/v1/nid/me";

const KAKAO_AUTH_URL: &str = "https://kauth.kakao.com/oauth/authorize";
const KAKAO_TOKEN_URL: &str = "https://kauth.kakao.com/oauth/token";
const KAKAO_USER_INFO_URL: &str = "https://kapi.kakao.com/v2/user/me";

/// Client registration and endpoints for one OAuth provider.
#[derive(Clone, Debug)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,

    pub auth_url: String,
    pub token_url: String,
    pub user_info_url: String,
}

/// Language model endpoints used by the recipe service.
#[derive(Clone, Debug)]
pub struct AiConfig {
    pub ollama_url: Option<String>,
    pub ollama_model_name: Option<String>,

    pub openai_api_key: Option<String>,
    pub openai_model_name: String,
    pub openai_base_url: String,

    /// Token budget for a single completion.
    pub num_predict: u32,
}

/// Image storage backend selection.
///
/// S3 is used when `aws_bucket_name` is set, the local filesystem otherwise.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub aws_bucket_name: Option<String>,
    pub aws_region: String,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub upload_dir: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub app_url: String,
    pub frontend_url: String,

    pub jwt_secret_key: String,
    pub jwt_expire_hours: i64,
    pub phone_pepper: String,

    pub google: OAuthProviderConfig,
    pub naver: OAuthProviderConfig,
    pub kakao: OAuthProviderConfig,

    pub ai: AiConfig,
    pub storage: StorageConfig,

    /// Days before expiration an ingredient alert becomes due.
    pub expiration_alert_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: or_default("BIND_ADDRESS", "0.0.0.0:8000"),
            app_url: or_default("APP_URL", "http://localhost:8000"),
            frontend_url: or_default("FRONTEND_URL", "http://localhost:3000"),
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            jwt_expire_hours: parsed("JWT_EXPIRE_HOURS", 24)?,
            phone_pepper: required("PHONE_PEPPER")?,
            google: OAuthProviderConfig {
                client_id: required("GOOGLE_CLIENT_ID")?,
                client_secret: required("GOOGLE_CLIENT_SECRET")?,
                redirect_uri: required("GOOGLE_REDIRECT_URI")?,
                auth_url: GOOGLE_AUTH_URL.to_string(),
                token_url: GOOGLE_TOKEN_URL.to_string(),
                user_info_url: GOOGLE_USER_INFO_URL.to_string(),
            },
            naver: OAuthProviderConfig {
                client_id: required("NAVER_CLIENT_ID")?,
                client_secret: required("NAVER_CLIENT_SECRET")?,
                redirect_uri: required("NAVER_REDIRECT_URI")?,
                auth_url: NAVER_AUTH_URL.to_string(),
                token_url: NAVER_TOKEN_URL.to_string(),
                user_info_url: NAVER_USER_INFO_URL.to_string(),
            },
            kakao: OAuthProviderConfig {
                client_id: required("KAKAO_CLIENT_ID")?,
                client_secret: required("KAKAO_CLIENT_SECRET")?,
                redirect_uri: required("KAKAO_REDIRECT_URI")?,
                auth_url: KAKAO_AUTH_URL.to_string(),
                token_url: KAKAO_TOKEN_URL.to_string(),
                user_info_url: KAKAO_USER_INFO_URL.to_string(),
            },
            ai: AiConfig {
                ollama_url: optional("OLLAMA_URL"),
                ollama_model_name: optional("OLLAMA_MODEL_NAME"),
                openai_api_key: optional("OPENAI_API_KEY"),
                openai_model_name: or_default("OPENAI_MODEL_NAME", "gpt-4o-mini"),
                openai_base_url: or_default("OPENAI_BASE_URL", "https://api.openai.com"),
                num_predict: parsed("AI_NUM_PREDICT", 1000)?,
            },
            storage: StorageConfig {
                aws_bucket_name: optional("AWS_BUCKET_NAME"),
                aws_region: or_default("AWS_REGION", "ap-northeast-2"),
                aws_access_key_id: optional("AWS_ACCESS_KEY_ID"),
                aws_secret_access_key: optional("AWS_SECRET_ACCESS_KEY"),
                upload_dir: or_default("UPLOAD_DIR", "./uploads"),
            },
            expiration_alert_days: parsed("EXPIRATION_ALERT_DAYS", 2)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn or_default(name: &str, default: &str) -> String {
    optional(name).unwrap_or_else(|| default.to_string())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
