//! API route configuration.

use std::sync::Arc;

use crate::api::handlers::{
    create_room_handler, delete_room_handler, docs_asset_handler, docs_index_handler,
    get_room_handler, list_rooms_handler, openapi_json_handler, update_room_handler,
};
use crate::api::openapi::{DOCS_PATH, SPEC_PATH};
use crate::state::AppState;
use axum::{Extension, Router, routing::get};
use utoipa_swagger_ui::Config;

/// Room routes.
///
/// # Endpoints
///
/// - `GET    /habitaciones`       - List rooms
/// - `POST   /habitaciones`       - Create a room
/// - `GET    /habitaciones/{id}`  - Get one room
/// - `PATCH  /habitaciones/{id}`  - Partially update a room
/// - `DELETE /habitaciones/{id}`  - Delete a room
pub fn room_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/habitaciones",
            get(list_rooms_handler).post(create_room_handler),
        )
        .route(
            "/habitaciones/{id}",
            get(get_room_handler)
                .patch(update_room_handler)
                .delete(delete_room_handler),
        )
}

/// Documentation routes.
///
/// # Endpoints
///
/// - `GET /api-docs`          - Swagger UI page
/// - `GET /api-docs/`         - Same page
/// - `GET /api-docs/{*file}`  - Swagger UI assets
/// - `GET /openapi.json`      - OpenAPI document
pub fn docs_routes() -> Router {
    let config = Arc::new(Config::new([SPEC_PATH]));

    Router::new()
        .route(SPEC_PATH, get(openapi_json_handler))
        .route(DOCS_PATH, get(docs_index_handler))
        .route(&format!("{DOCS_PATH}/"), get(docs_index_handler))
        .route(&format!("{DOCS_PATH}/{{*file}}"), get(docs_asset_handler))
        .layer(Extension(config))
}
