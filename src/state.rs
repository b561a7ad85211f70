//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::RoomService;
use crate::domain::repositories::RoomRepository;

/// State shared by all handlers.
///
/// Holds the room service, which owns the store client built at startup.
#[derive(Clone)]
pub struct AppState {
    pub room_service: Arc<RoomService>,
}

impl AppState {
    pub fn new(room_service: Arc<RoomService>) -> Self {
        Self { room_service }
    }

    /// Builds the state around a repository with default service settings.
    pub fn from_repository(repository: Arc<dyn RoomRepository>) -> Self {
        Self::new(Arc::new(RoomService::new(repository)))
    }
}
