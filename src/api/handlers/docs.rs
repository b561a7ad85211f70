//! Swagger UI and OpenAPI document handlers.
//!
//! The UI files come from `utoipa-swagger-ui`. The page itself is answered at
//! the bare docs path with a `<base>` element, so its relative asset links
//! resolve under `/api-docs/` without a redirect.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Path,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::Config;

use crate::api::openapi::{ApiDoc, DOCS_PATH};
use crate::error::AppError;

/// Swagger UI configuration shared by the docs handlers.
pub type DocsConfig = Arc<Config<'static>>;

/// Serves the OpenAPI document as JSON.
pub async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Serves the Swagger UI page.
pub async fn docs_index_handler(Extension(config): Extension<DocsConfig>) -> Response {
    match utoipa_swagger_ui::serve("", config) {
        Ok(Some(file)) => {
            let html = String::from_utf8_lossy(&file.bytes)
                .replacen("<head>", &format!("<head>\n    <base href=\"{DOCS_PATH}/\" />"), 1);
            Html(html).into_response()
        }
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => AppError::internal(e.to_string()).into_response(),
    }
}

/// Serves the Swagger UI assets (`swagger-ui.css`, `swagger-initializer.js`, ...).
pub async fn docs_asset_handler(
    Path(file): Path<String>,
    Extension(config): Extension<DocsConfig>,
) -> Response {
    match utoipa_swagger_ui::serve(&file, config) {
        Ok(Some(file)) => (
            [(CONTENT_TYPE, file.content_type)],
            file.bytes.into_owned(),
        )
            .into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => AppError::internal(e.to_string()).into_response(),
    }
}
