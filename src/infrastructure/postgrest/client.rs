//! PostgREST HTTP client.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::AppError;

const REST_PATH: &str = "/rest/v1";

/// HTTP client for a PostgREST endpoint.
///
/// Every request carries the project API key in both the `apikey` and
/// `Authorization: Bearer` headers.
#[derive(Clone)]
pub struct PostgrestClient {
    pub(super) base_url: String,
    pub(super) client: reqwest::Client,
}

impl PostgrestClient {
    /// Creates a client for the project at `project_url`.
    ///
    /// # Arguments
    ///
    /// - `project_url` - project root, e.g. `https://xyz.supabase.co`
    /// - `api_key` - project API key
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the key is not a valid header value or
    /// the HTTP client cannot be built.
    pub fn new(project_url: &str, api_key: &str) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();

        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| AppError::internal(format!("Invalid store API key: {e}")))?;
        key.set_sensitive(true);
        headers.insert("apikey", key);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| AppError::internal(format!("Invalid store API key: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: format!("{}{}", project_url.trim_end_matches('/'), REST_PATH),
            client,
        })
    }

    /// URL of a table endpoint.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }
}
