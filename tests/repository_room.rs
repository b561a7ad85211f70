//! Tests against a real Postgres database.
//!
//! Run with `DATABASE_URL` set and `cargo test -- --ignored`; `#[sqlx::test]`
//! creates a fresh database per test and applies `migrations/`.

use hotel_rooms::domain::entities::{NewRoom, ROOM_NOT_FOUND, RoomChanges};
use hotel_rooms::error::AppError;
use hotel_rooms::domain::repositories::RoomRepository;
use hotel_rooms::infrastructure::persistence::PgRoomRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_room(num_habi: i64) -> NewRoom {
    NewRoom {
        num_habi,
        tipo: "doble".to_string(),
        capacidad: 2,
        precio: 500,
        estado: false,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgRoomRepository::new(Arc::new(pool));

    let created = repo.create(new_room(101)).await.unwrap();

    assert!(created.habitacion_id > 0);
    assert!(!created.estado);

    let by_id = repo.find_by_id(created.habitacion_id).await.unwrap();
    assert_eq!(by_id, Some(created.clone()));

    let by_number = repo.find_by_number(101).await.unwrap();
    assert_eq!(by_number, Some(created));

    assert!(repo.find_by_number(999).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list(pool: PgPool) {
    let repo = PgRoomRepository::new(Arc::new(pool));
    assert!(repo.list().await.unwrap().is_empty());

    repo.create(new_room(101)).await.unwrap();
    repo.create(new_room(102)).await.unwrap();

    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_partial_update(pool: PgPool) {
    let repo = PgRoomRepository::new(Arc::new(pool));
    let created = repo.create(new_room(101)).await.unwrap();

    let updated = repo
        .update(
            created.habitacion_id,
            RoomChanges {
                precio: Some(650),
                estado: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.precio, 650);
    assert!(updated.estado);
    assert_eq!(updated.num_habi, 101);
    assert_eq!(updated.tipo, "doble");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_row(pool: PgPool) {
    let repo = PgRoomRepository::new(Arc::new(pool));

    let result = repo
        .update(
            12345,
            RoomChanges {
                precio: Some(1),
                ..Default::default()
            },
        )
        .await;

    assert_eq!(result.unwrap_err(), AppError::not_found(ROOM_NOT_FOUND));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = PgRoomRepository::new(Arc::new(pool));
    let created = repo.create(new_room(101)).await.unwrap();

    repo.delete(created.habitacion_id).await.unwrap();

    assert!(repo.find_by_id(created.habitacion_id).await.unwrap().is_none());
    repo.ping().await.unwrap();
}
