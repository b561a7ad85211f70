//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as`, so the crate compiles
//! without a live database.
//!
//! # Repositories
//!
//! - [`PgRoomRepository`] - Room storage and retrieval

pub mod pg_room_repository;

pub use pg_room_repository::PgRoomRepository;
