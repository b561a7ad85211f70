//! DTOs for health check endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
