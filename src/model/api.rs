use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    /// Machine readable error code, e.g. `EMAIL_CONFLICT`.
    pub code: String,
    /// Human readable explanation.
    pub detail: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
