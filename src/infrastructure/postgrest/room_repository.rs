//! PostgREST implementation of the room repository.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::PostgrestClient;
use super::response::{check_status, handle_response};
use crate::domain::entities::{NewRoom, ROOM_NOT_FOUND, Room, RoomChanges};
use crate::domain::repositories::RoomRepository;
use crate::error::AppError;

pub const DEFAULT_TABLE: &str = "habitaciones";

const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Debug, Deserialize)]
struct RoomRecord {
    habitacion_id: i64,
    num_habi: i64,
    tipo: String,
    capacidad: i64,
    precio: i64,
    estado: bool,
}

impl From<RoomRecord> for Room {
    fn from(r: RoomRecord) -> Self {
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

#[derive(Debug, Serialize)]
struct InsertRoom<'a> {
    num_habi: i64,
    tipo: &'a str,
    capacidad: i64,
    precio: i64,
    estado: bool,
}

/// Update payload; absent fields are left out of the JSON so the store keeps them.
#[derive(Debug, Serialize)]
struct PatchRoom<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    num_habi: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tipo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capacidad: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    precio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    estado: Option<bool>,
}

fn eq(value: i64) -> String {
    format!("eq.{value}")
}

/// Room repository backed by a PostgREST table.
pub struct PostgrestRoomRepository {
    client: PostgrestClient,
    table: String,
}

impl PostgrestRoomRepository {
    /// Creates a repository for the default `habitaciones` table.
    pub fn new(client: PostgrestClient) -> Self {
        Self::with_table(client, DEFAULT_TABLE)
    }

    /// Creates a repository for a differently named table.
    pub fn with_table(client: PostgrestClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    fn url(&self) -> String {
        self.client.table_url(&self.table)
    }

    async fn select_one(&self, column: &str, value: i64) -> Result<Option<Room>, AppError> {
        let filter = eq(value);
        let response = self
            .client
            .client
            .get(self.url())
            .query(&[("select", "*"), (column, filter.as_str()), ("limit", "1")])
            .send()
            .await?;

        let rows: Vec<RoomRecord> = handle_response(response).await?;
        Ok(rows.into_iter().next().map(Room::from))
    }
}

#[async_trait]
impl RoomRepository for PostgrestRoomRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn list(&self) -> Result<Vec<Room>, AppError> {
        let response = self
            .client
            .client
            .get(self.url())
            .query(&[("select", "*")])
            .send()
            .await?;

        let rows: Vec<RoomRecord> = handle_response(response).await?;
        Ok(rows.into_iter().map(Room::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError> {
        self.select_one("habitacion_id", id).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%num_habi))]
    async fn find_by_number(&self, num_habi: i64) -> Result<Option<Room>, AppError> {
        self.select_one("num_habi", num_habi).await
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn create(&self, new_room: NewRoom) -> Result<Room, AppError> {
        let body = InsertRoom {
            num_habi: new_room.num_habi,
            tipo: &new_room.tipo,
            capacidad: new_room.capacidad,
            precio: new_room.precio,
            estado: new_room.estado,
        };

        let response = self
            .client
            .client
            .post(self.url())
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&body)
            .send()
            .await?;

        let rows: Vec<RoomRecord> = handle_response(response).await?;
        rows.into_iter()
            .next()
            .map(Room::from)
            .ok_or_else(|| AppError::internal("Store returned no row for the inserted room"))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: i64, changes: RoomChanges) -> Result<Room, AppError> {
        let body = PatchRoom {
            num_habi: changes.num_habi,
            tipo: changes.tipo.as_deref(),
            capacidad: changes.capacidad,
            precio: changes.precio,
            estado: changes.estado,
        };

        let response = self
            .client
            .client
            .patch(self.url())
            .query(&[("habitacion_id", eq(id))])
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&body)
            .send()
            .await?;

        let rows: Vec<RoomRecord> = handle_response(response).await?;
        rows.into_iter()
            .next()
            .map(Room::from)
            .ok_or_else(|| AppError::not_found(ROOM_NOT_FOUND))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let response = self
            .client
            .client
            .delete(self.url())
            .query(&[("habitacion_id", eq(id))])
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let response = self
            .client
            .client
            .get(self.url())
            .query(&[("select", "habitacion_id"), ("limit", "1")])
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}
