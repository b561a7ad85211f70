//! Handlers for the room endpoints.
//!
//! Ids and bodies are validated here before any store call; the service then
//! runs the existence and uniqueness checks.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};

use crate::api::dto::room::{
    CreateRoomRequest, INVALID_BODY, RoomItem, UpdateRoomRequest, parse_room_id,
};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

fn json_object(payload: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    match payload {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(_) => Err(AppError::bad_request(INVALID_BODY)),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(AppError::bad_request(INVALID_BODY))
        }
    }
}

/// Lists all rooms.
///
/// # Endpoint
///
/// `GET /habitaciones`
#[utoipa::path(
    get,
    path = "/habitaciones",
    tag = "habitaciones",
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomItem>),
        (status = 404, description = "No rooms (only in empty-list-as-not-found mode)", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn list_rooms_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomItem>>, AppError> {
    let rooms = state.room_service.list_rooms().await?;

    Ok(Json(rooms.into_iter().map(RoomItem::from).collect()))
}

/// Returns one room.
///
/// # Endpoint
///
/// `GET /habitaciones/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not a positive integer.
/// Returns 404 if no room matches or the lookup fails.
#[utoipa::path(
    get,
    path = "/habitaciones/{id}",
    tag = "habitaciones",
    params(("id" = i64, Path, description = "Room id (positive integer)")),
    responses(
        (status = 200, description = "The room", body = RoomItem),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Room not found", body = ErrorBody)
    )
)]
pub async fn get_room_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RoomItem>, AppError> {
    let id = parse_room_id(&id)?;
    let room = state.room_service.get_room(id).await?;

    Ok(Json(room.into()))
}

/// Creates a room.
///
/// # Endpoint
///
/// `POST /habitaciones`
///
/// # Errors
///
/// Returns 400 if a field is missing or invalid.
/// Returns 409 if the room number is already taken.
#[utoipa::path(
    post,
    path = "/habitaciones",
    tag = "habitaciones",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = RoomItem),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 409, description = "Room number already exists", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn create_room_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomItem>), AppError> {
    let body = json_object(payload)?;
    let request = CreateRoomRequest::from_json(&body)?;

    let room = state.room_service.create_room(request.into()).await?;

    Ok((StatusCode::CREATED, Json(room.into())))
}

/// Partially updates a room.
///
/// # Endpoint
///
/// `PATCH /habitaciones/{id}`
///
/// Only the fields present in the body are changed.
///
/// # Errors
///
/// Returns 400 if the id or a provided field is invalid.
/// Returns 404 if the room does not exist.
#[utoipa::path(
    patch,
    path = "/habitaciones/{id}",
    tag = "habitaciones",
    params(("id" = i64, Path, description = "Room id (positive integer)")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = RoomItem),
        (status = 400, description = "Invalid id or fields", body = ErrorBody),
        (status = 404, description = "Room not found", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn update_room_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RoomItem>, AppError> {
    let id = parse_room_id(&id)?;
    let body = json_object(payload)?;
    let request = UpdateRoomRequest::from_json(&body)?;

    let room = state.room_service.update_room(id, request.into()).await?;

    Ok(Json(room.into()))
}

/// Deletes a room.
///
/// # Endpoint
///
/// `DELETE /habitaciones/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not a positive integer.
/// Returns 404 if the room does not exist.
#[utoipa::path(
    delete,
    path = "/habitaciones/{id}",
    tag = "habitaciones",
    params(("id" = i64, Path, description = "Room id (positive integer)")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Room not found", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn delete_room_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_room_id(&id)?;
    state.room_service.delete_room(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
