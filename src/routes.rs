//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/habitaciones`, `/habitaciones/{id}` - Room CRUD
//! - `GET /health`                         - Store connectivity check
//! - `GET /api-docs`, `/api-docs/{*file}`  - Swagger UI
//! - `GET /openapi.json`                   - OpenAPI document
//!
//! Every route goes through the request tracing layer.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::room_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(api::routes::docs_routes())
        .layer(tracing::layer())
}
