//! PostgreSQL implementation of the room repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRoom, ROOM_NOT_FOUND, Room, RoomChanges};
use crate::domain::repositories::RoomRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    habitacion_id: i64,
    num_habi: i64,
    tipo: String,
    capacidad: i64,
    precio: i64,
    estado: bool,
}

impl From<RoomRow> for Room {
    fn from(r: RoomRow) -> Self {
        Room {
            habitacion_id: r.habitacion_id,
            num_habi: r.num_habi,
            tipo: r.tipo,
            capacidad: r.capacidad,
            precio: r.precio,
            estado: r.estado,
        }
    }
}

/// PostgreSQL repository for the `habitaciones` table.
///
/// Expects the schema from `migrations/`. No unique constraint is placed on
/// `num_habi`; uniqueness is checked by the service before insert.
pub struct PgRoomRepository {
    pool: Arc<PgPool>,
}

impl PgRoomRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, AppError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT habitacion_id, num_habi, tipo, capacidad, precio, estado
            FROM habitaciones
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT habitacion_id, num_habi, tipo, capacidad, precio, estado
            FROM habitaciones
            WHERE habitacion_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Room::from))
    }

    async fn find_by_number(&self, num_habi: i64) -> Result<Option<Room>, AppError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT habitacion_id, num_habi, tipo, capacidad, precio, estado
            FROM habitaciones
            WHERE num_habi = $1
            LIMIT 1
            "#,
        )
        .bind(num_habi)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Room::from))
    }

    async fn create(&self, new_room: NewRoom) -> Result<Room, AppError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            INSERT INTO habitaciones (num_habi, tipo, capacidad, precio, estado)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING habitacion_id, num_habi, tipo, capacidad, precio, estado
            "#,
        )
        .bind(new_room.num_habi)
        .bind(new_room.tipo)
        .bind(new_room.capacidad)
        .bind(new_room.precio)
        .bind(new_room.estado)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: RoomChanges) -> Result<Room, AppError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            UPDATE habitaciones SET
                num_habi  = COALESCE($2, num_habi),
                tipo      = COALESCE($3, tipo),
                capacidad = COALESCE($4, capacidad),
                precio    = COALESCE($5, precio),
                estado    = COALESCE($6, estado)
            WHERE habitacion_id = $1
            RETURNING habitacion_id, num_habi, tipo, capacidad, precio, estado
            "#,
        )
        .bind(id)
        .bind(changes.num_habi)
        .bind(changes.tipo)
        .bind(changes.capacidad)
        .bind(changes.precio)
        .bind(changes.estado)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Room::from)
            .ok_or_else(|| AppError::not_found(ROOM_NOT_FOUND))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM habitaciones WHERE habitacion_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
