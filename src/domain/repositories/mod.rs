//! Repository trait definitions for the domain layer.
//!
//! The [`RoomRepository`] trait is the only contract between the service and the
//! remote data store. Implementations live in `crate::infrastructure`:
//!
//! - [`crate::infrastructure::postgrest::PostgrestRoomRepository`] - hosted REST interface
//! - [`crate::infrastructure::persistence::PgRoomRepository`] - direct Postgres connection
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod room_repository;

pub use room_repository::RoomRepository;

#[cfg(test)]
pub use room_repository::MockRoomRepository;
