//! # Hotel Rooms
//!
//! A small REST service managing hotel rooms (`/habitaciones`) on top of a
//! hosted data store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The room entity and the store trait
//! - **Application Layer** ([`application`]) - Existence and uniqueness checks
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgREST and Postgres store clients
//! - **API Layer** ([`api`]) - Handlers, DTOs with validation, OpenAPI document
//!
//! ## Quick Start
//!
//! ```bash
//! export SUPABASE_URL="https://<project>.supabase.co"
//! export SUPABASE_KEY="<api key>"
//! cargo run
//! ```
//!
//! Interactive documentation is served at `/api-docs`.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::RoomService;
    pub use crate::domain::entities::{NewRoom, Room, RoomChanges};
    pub use crate::domain::repositories::RoomRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
