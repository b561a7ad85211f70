//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can return is an [`AppError`]. The response body is
//! always `{"error": "<message>"}` with the status taken from the variant.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[schema(example = "Habitación no encontrada")]
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Malformed, missing or out-of-range input (400).
    #[error("{message}")]
    Validation { message: String },
    /// No matching row (404).
    #[error("{message}")]
    NotFound { message: String },
    /// Duplicate unique key (409).
    #[error("{message}")]
    Conflict { message: String },
    /// Store failure, message passed through verbatim (500).
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::Internal { message } = &self {
            tracing::error!(error = %message, "Store request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(db.message().to_string());
        }

        AppError::internal(e.to_string())
    }
}

/// Reports the first failing field, taking fields in name order so the
/// message is stable when several rules fail at once.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.keys().collect();
        fields.sort();

        let message = fields
            .into_iter()
            .flat_map(|field| field_errors[field].iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        AppError::bad_request(message)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::internal(e.to_string())
    }
}
