//! Repository trait for room storage.

use crate::domain::entities::{NewRoom, Room, RoomChanges};
use crate::error::AppError;
use async_trait::async_trait;

/// Data store interface for the `habitaciones` collection.
///
/// Every call may fail; implementations report store-side failures as
/// [`AppError::Internal`] carrying the store's own message.
///
/// # Implementations
///
/// - [`crate::infrastructure::postgrest::PostgrestRoomRepository`]
/// - [`crate::infrastructure::persistence::PgRoomRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Returns every room, in whatever order the store yields them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<Room>, AppError>;

    /// Finds a room by its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError>;

    /// Finds a room by its room number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_number(&self, num_habi: i64) -> Result<Option<Room>, AppError>;

    /// Inserts a room and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the store rejects a duplicate key.
    /// Returns [`AppError::Internal`] on other store errors.
    async fn create(&self, new_room: NewRoom) -> Result<Room, AppError>;

    /// Applies a partial update and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matched.
    /// Returns [`AppError::Conflict`] if the store rejects a duplicate key.
    /// Returns [`AppError::Internal`] on other store errors.
    async fn update(&self, id: i64, changes: RoomChanges) -> Result<Room, AppError>;

    /// Deletes a room.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
