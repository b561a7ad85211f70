//! HTTP request handlers for API endpoints.

pub mod docs;
pub mod health;
pub mod rooms;

pub use docs::{docs_asset_handler, docs_index_handler, openapi_json_handler};
pub use health::health_handler;
pub use rooms::{
    create_room_handler, delete_room_handler, get_room_handler, list_rooms_handler,
    update_room_handler,
};
