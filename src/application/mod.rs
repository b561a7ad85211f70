//! Application layer services.
//!
//! Services apply the validation policy and existence/uniqueness checks, then
//! delegate to the injected repository.
//!
//! - [`services::room_service::RoomService`] - Room CRUD

pub mod services;
