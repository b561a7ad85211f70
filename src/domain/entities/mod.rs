//! Core domain entities.
//!
//! Entities follow the same split used for every write path:
//! - [`Room`] - A stored row, identified by `habitacion_id`
//! - [`NewRoom`] - Input for creating a row (no id yet)
//! - [`RoomChanges`] - Partial update, `None` leaves a column unchanged

pub mod room;

pub use room::{NewRoom, ROOM_NOT_FOUND, Room, RoomChanges};
