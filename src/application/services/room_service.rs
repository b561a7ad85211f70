//! Room management service.

use std::sync::Arc;

pub use crate::domain::entities::ROOM_NOT_FOUND;
use crate::domain::entities::{NewRoom, Room, RoomChanges};
use crate::domain::repositories::RoomRepository;
use crate::error::AppError;

pub const NO_ROOMS: &str = "No hay habitaciones registradas";

/// Service for the room CRUD operations.
///
/// Applies the existence and uniqueness pre-checks before each write:
/// - create refuses a `num_habi` that is already taken
/// - update and delete refuse ids with no row
///
/// The uniqueness check and the insert are two separate store calls, so two
/// concurrent creates with the same room number can both succeed unless the
/// store itself enforces a unique constraint.
pub struct RoomService {
    repository: Arc<dyn RoomRepository>,
    empty_list_not_found: bool,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self {
            repository,
            empty_list_not_found: false,
        }
    }

    /// Makes [`Self::list_rooms`] report an empty collection as not found.
    pub fn with_empty_list_not_found(mut self, enabled: bool) -> Self {
        self.empty_list_not_found = enabled;
        self
    }

    /// Lists all rooms.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an empty collection when the
    /// empty-list-as-not-found mode is enabled.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        let rooms = self.repository.list().await?;

        if rooms.is_empty() && self.empty_list_not_found {
            return Err(AppError::not_found(NO_ROOMS));
        }

        Ok(rooms)
    }

    /// Retrieves a room by id.
    ///
    /// A failing lookup is reported the same way as a missing row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches or the store query fails.
    pub async fn get_room(&self, id: i64) -> Result<Room, AppError> {
        match self.repository.find_by_id(id).await {
            Ok(Some(room)) => Ok(room),
            Ok(None) => Err(AppError::not_found(ROOM_NOT_FOUND)),
            Err(e) => {
                tracing::warn!(room_id = id, error = %e, "Room lookup failed");
                Err(AppError::not_found(ROOM_NOT_FOUND))
            }
        }
    }

    /// Creates a room after checking that its number is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a room with the same `num_habi` exists.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create_room(&self, new_room: NewRoom) -> Result<Room, AppError> {
        if self
            .repository
            .find_by_number(new_room.num_habi)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Ya existe una habitación con el número {}",
                new_room.num_habi
            )));
        }

        let room = self.repository.create(new_room).await?;
        tracing::info!(
            room_id = room.habitacion_id,
            num_habi = room.num_habi,
            "Room created"
        );

        Ok(room)
    }

    /// Applies a partial update to an existing room.
    ///
    /// An empty change set returns the current row without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the room does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn update_room(&self, id: i64, changes: RoomChanges) -> Result<Room, AppError> {
        let existing = self.require_room(id).await?;

        if changes.is_empty() {
            return Ok(existing);
        }

        let room = self.repository.update(id, changes).await?;
        tracing::info!(room_id = id, "Room updated");

        Ok(room)
    }

    /// Deletes an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the room does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_room(&self, id: i64) -> Result<(), AppError> {
        self.require_room(id).await?;

        self.repository.delete(id).await?;
        tracing::info!(room_id = id, "Room deleted");

        Ok(())
    }

    /// Checks store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn require_room(&self, id: i64) -> Result<Room, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ROOM_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRoomRepository;

    fn create_test_room(id: i64, num_habi: i64) -> Room {
        Room {
            habitacion_id: id,
            num_habi,
            tipo: "doble".to_string(),
            capacidad: 2,
            precio: 500,
            estado: true,
        }
    }

    fn new_room(num_habi: i64) -> NewRoom {
        NewRoom {
            num_habi,
            tipo: "doble".to_string(),
            capacidad: 2,
            precio: 500,
            estado: false,
        }
    }

    fn service(mock_repo: MockRoomRepository) -> RoomService {
        RoomService::new(Arc::new(mock_repo))
    }

    #[tokio::test]
    async fn test_list_rooms_empty_is_ok_by_default() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));

        let result = service(mock_repo).list_rooms().await;

        assert_eq!(result.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_list_rooms_empty_not_found_mode() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));

        let result = service(mock_repo)
            .with_empty_list_not_found(true)
            .list_rooms()
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_rooms_store_error() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("connection refused")));

        let result = service(mock_repo).list_rooms().await;

        assert_eq!(
            result.unwrap_err(),
            AppError::internal("connection refused")
        );
    }

    #[tokio::test]
    async fn test_get_room_success() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|id| Ok(Some(create_test_room(id, 101))));

        let room = service(mock_repo).get_room(7).await.unwrap();

        assert_eq!(room.habitacion_id, 7);
    }

    #[tokio::test]
    async fn test_get_room_store_error_is_not_found() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::internal("timeout")));

        let result = service(mock_repo).get_room(7).await;

        assert_eq!(result.unwrap_err(), AppError::not_found(ROOM_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_create_room_success() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_number()
            .withf(|n| *n == 101)
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_room| Ok(new_room.with_id(1)));

        let room = service(mock_repo).create_room(new_room(101)).await.unwrap();

        assert_eq!(room.habitacion_id, 1);
        assert!(!room.estado);
    }

    #[tokio::test]
    async fn test_create_room_duplicate_number() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_number()
            .times(1)
            .returning(|n| Ok(Some(create_test_room(3, n))));
        mock_repo.expect_create().never();

        let result = service(mock_repo).create_room(new_room(101)).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_room_not_found() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let changes = RoomChanges {
            precio: Some(10),
            ..Default::default()
        };
        let result = service(mock_repo).update_room(5, changes).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_room_lookup_error_is_internal() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::internal("boom")));

        let result = service(mock_repo)
            .update_room(5, RoomChanges::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_update_room_empty_changes_skips_store_write() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_room(id, 101))));
        mock_repo.expect_update().never();

        let room = service(mock_repo)
            .update_room(5, RoomChanges::default())
            .await
            .unwrap();

        assert_eq!(room, create_test_room(5, 101));
    }

    #[tokio::test]
    async fn test_update_room_success() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_room(id, 101))));
        mock_repo
            .expect_update()
            .withf(|id, changes| *id == 5 && changes.precio == Some(650))
            .times(1)
            .returning(|id, changes| {
                let mut room = create_test_room(id, 101);
                changes.apply_to(&mut room);
                Ok(room)
            });

        let changes = RoomChanges {
            precio: Some(650),
            ..Default::default()
        };
        let room = service(mock_repo).update_room(5, changes).await.unwrap();

        assert_eq!(room.precio, 650);
    }

    #[tokio::test]
    async fn test_delete_room_not_found() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        mock_repo.expect_delete().never();

        let result = service(mock_repo).delete_room(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_room_success() {
        let mut mock_repo = MockRoomRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_room(id, 101))));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 9)
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(mock_repo).delete_room(9).await.is_ok());
    }
}
