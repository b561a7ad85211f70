//! Shared handling of PostgREST responses.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PostgrestErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Decodes a successful response body, or maps the failure to an [`AppError`].
///
/// The store's own `message` is passed through unchanged. A unique violation
/// maps to [`AppError::Conflict`]; every other failure is
/// [`AppError::Internal`].
pub(super) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

/// Passes successful responses through and converts the rest to errors.
pub(super) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: PostgrestErrorBody = serde_json::from_str(&text).unwrap_or_default();

    tracing::debug!(
        %status,
        code = body.code.as_deref().unwrap_or(""),
        details = body.details.as_deref().unwrap_or(""),
        "Store returned an error"
    );

    let message = body
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Store responded with status {status}: {text}"));

    if body.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return Err(AppError::conflict(message));
    }

    Err(AppError::internal(message))
}
