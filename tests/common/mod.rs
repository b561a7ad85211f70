#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use hotel_rooms::application::services::RoomService;
use hotel_rooms::domain::entities::{NewRoom, Room, RoomChanges};
use hotel_rooms::domain::repositories::RoomRepository;
use hotel_rooms::error::AppError;
use hotel_rooms::routes::app_router;
use hotel_rooms::state::AppState;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store double keeping rows in memory, with ids assigned from 1.
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rows: Mutex<BTreeMap<i64, Room>>,
    next_id: Mutex<i64>,
    calls: AtomicUsize,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, AppError> {
        self.touch();
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError> {
        self.touch();
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_number(&self, num_habi: i64) -> Result<Option<Room>, AppError> {
        self.touch();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|r| r.num_habi == num_habi)
            .cloned())
    }

    async fn create(&self, new_room: NewRoom) -> Result<Room, AppError> {
        self.touch();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let room = new_room.with_id(*next_id);
        self.rows
            .lock()
            .unwrap()
            .insert(room.habitacion_id, room.clone());
        Ok(room)
    }

    async fn update(&self, id: i64, changes: RoomChanges) -> Result<Room, AppError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let room = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Habitación no encontrada"))?;
        changes.apply_to(room);
        Ok(room.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.touch();
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.touch();
        Ok(())
    }
}

/// Store double where every call fails with the same message.
pub struct FailingRoomRepository {
    pub message: String,
}

impl FailingRoomRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T, AppError> {
        Err(AppError::internal(self.message.clone()))
    }
}

#[async_trait]
impl RoomRepository for FailingRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, AppError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Room>, AppError> {
        self.fail()
    }

    async fn find_by_number(&self, _num_habi: i64) -> Result<Option<Room>, AppError> {
        self.fail()
    }

    async fn create(&self, _new_room: NewRoom) -> Result<Room, AppError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _changes: RoomChanges) -> Result<Room, AppError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.fail()
    }
}

pub fn create_test_state(repository: Arc<dyn RoomRepository>) -> AppState {
    AppState::from_repository(repository)
}

/// Full application router over an in-memory store.
pub fn make_server() -> (TestServer, Arc<InMemoryRoomRepository>) {
    let repo = Arc::new(InMemoryRoomRepository::new());
    let state = create_test_state(repo.clone());
    (TestServer::new(app_router(state)).unwrap(), repo)
}

pub fn make_server_with_service(service: RoomService) -> TestServer {
    let state = AppState::new(Arc::new(service));
    TestServer::new(app_router(state)).unwrap()
}

pub fn make_failing_server(message: &str) -> TestServer {
    let state = create_test_state(Arc::new(FailingRoomRepository::new(message)));
    TestServer::new(app_router(state)).unwrap()
}

pub async fn seed_room(repo: &InMemoryRoomRepository, num_habi: i64, estado: bool) -> Room {
    repo.create(NewRoom {
        num_habi,
        tipo: "doble".to_string(),
        capacidad: 2,
        precio: 500,
        estado,
    })
    .await
    .unwrap()
}
