//! Business logic services for the application layer.

pub mod room_service;

pub use room_service::RoomService;
