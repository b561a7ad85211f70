//! OpenAPI document generated from the route annotations.
//!
//! `ApiDoc::openapi()` returns the document; [`crate::api::routes::docs_routes`]
//! serves it at [`SPEC_PATH`] and the Swagger UI at [`DOCS_PATH`].

use utoipa::OpenApi;

use crate::api::dto::health::HealthResponse;
use crate::api::dto::room::{CreateRoomRequest, RoomItem, UpdateRoomRequest};
use crate::api::handlers::{health, rooms};
use crate::error::ErrorBody;

/// Path of the interactive documentation page.
pub const DOCS_PATH: &str = "/api-docs";
/// Path of the JSON document.
pub const SPEC_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Rooms API",
        description = "CRUD de habitaciones de hotel"
    ),
    paths(
        rooms::list_rooms_handler,
        rooms::get_room_handler,
        rooms::create_room_handler,
        rooms::update_room_handler,
        rooms::delete_room_handler,
        health::health_handler,
    ),
    components(schemas(
        RoomItem,
        CreateRoomRequest,
        UpdateRoomRequest,
        ErrorBody,
        HealthResponse,
    )),
    tags(
        (name = "habitaciones", description = "Room management"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;
