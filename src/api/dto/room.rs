//! DTOs for the room endpoints.
//!
//! Request bodies are read from a raw JSON object rather than derived with
//! `Deserialize`, so a field of the wrong type yields that field's own message
//! instead of a generic decoding error. Range and length rules are then checked
//! with `validator`.
//!
//! Integer fields accept any JSON number with no fractional part, so `101.0`
//! reads as `101` while `2.5` is rejected.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{NewRoom, Room, RoomChanges};
use crate::error::AppError;

pub const INVALID_ID: &str = "ID inválido. Debe ser un número entero positivo.";
pub const INVALID_BODY: &str = "El cuerpo de la solicitud debe ser un objeto JSON.";

/// Fields required on create, in the order they are reported.
const REQUIRED_FIELDS: [&str; 5] = ["num_habi", "tipo", "capacidad", "precio", "estado"];

/// Message reported when a field has the wrong type or is out of range.
pub fn invalid_field_message(field: &str) -> &'static str {
    match field {
        "num_habi" => "Número de habitación inválido. Debe ser un número entero positivo.",
        "tipo" => "Tipo inválido. Debe ser un texto no vacío.",
        "capacidad" => "Capacidad inválida. Debe ser un número entero positivo.",
        "precio" => "Precio inválido. Debe ser un número entero positivo.",
        "estado" => "Estado inválido. Debe ser un valor booleano (true o false).",
        _ => "Campo inválido.",
    }
}

/// Parses a path id, which must be a positive integer.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for zero, negative or non-numeric ids.
pub fn parse_room_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(INVALID_ID)),
    }
}

/// A room as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoomItem {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub habitacion_id: i64,
    /// Room number, unique across rooms.
    #[schema(example = 101)]
    pub num_habi: i64,
    /// Room category.
    #[schema(example = "doble")]
    pub tipo: String,
    /// Number of guests.
    #[schema(example = 2)]
    pub capacidad: i64,
    /// Price per night.
    #[schema(example = 500)]
    pub precio: i64,
    /// Availability flag.
    #[schema(example = true)]
    pub estado: bool,
}

impl From<Room> for RoomItem {
    fn from(r: Room) -> Self {
        RoomItem {
            habitacion_id: r.habitacion_id,
            num_habi: r.num_habi,
            tipo: r.tipo,
            capacidad: r.capacidad,
            precio: r.precio,
            estado: r.estado,
        }
    }
}

/// Request body for `POST /habitaciones`. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct CreateRoomRequest {
    #[validate(range(
        min = 1,
        message = "Número de habitación inválido. Debe ser un número entero positivo."
    ))]
    #[schema(minimum = 1, example = 101)]
    pub num_habi: i64,

    #[validate(length(min = 1, message = "Tipo inválido. Debe ser un texto no vacío."))]
    #[schema(example = "doble")]
    pub tipo: String,

    #[validate(range(
        min = 1,
        message = "Capacidad inválida. Debe ser un número entero positivo."
    ))]
    #[schema(minimum = 1, example = 2)]
    pub capacidad: i64,

    #[validate(range(min = 1, message = "Precio inválido. Debe ser un número entero positivo."))]
    #[schema(minimum = 1, example = 500)]
    pub precio: i64,

    #[schema(example = true)]
    pub estado: bool,
}

impl CreateRoomRequest {
    /// Reads a create request from a JSON object.
    ///
    /// A field counts as missing when it is absent or `null`; `false` and `0`
    /// are present values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing missing fields, or with the
    /// message of the first field that has the wrong type or range.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, AppError> {
        let fields = Fields(body);

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| fields.get(name).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::bad_request(format!(
                "Faltan campos obligatorios: {}",
                missing.join(", ")
            )));
        }

        let (Some(num_habi), Some(tipo), Some(capacidad), Some(precio), Some(estado)) = (
            fields.integer("num_habi")?,
            fields.string("tipo")?,
            fields.integer("capacidad")?,
            fields.integer("precio")?,
            fields.boolean("estado")?,
        ) else {
            return Err(AppError::bad_request(INVALID_BODY));
        };

        let request = Self {
            num_habi,
            tipo,
            capacidad,
            precio,
            estado,
        };
        request.validate()?;

        Ok(request)
    }
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(r: CreateRoomRequest) -> Self {
        NewRoom {
            num_habi: r.num_habi,
            tipo: r.tipo,
            capacidad: r.capacidad,
            precio: r.precio,
            estado: r.estado,
        }
    }
}

/// Request body for `PATCH /habitaciones/{id}`.
///
/// All fields are optional; only provided fields are changed. `null` is
/// treated like an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, ToSchema)]
pub struct UpdateRoomRequest {
    #[validate(range(
        min = 1,
        message = "Número de habitación inválido. Debe ser un número entero positivo."
    ))]
    #[schema(minimum = 1, example = 102)]
    pub num_habi: Option<i64>,

    #[validate(length(min = 1, message = "Tipo inválido. Debe ser un texto no vacío."))]
    #[schema(example = "suite")]
    pub tipo: Option<String>,

    #[validate(range(
        min = 1,
        message = "Capacidad inválida. Debe ser un número entero positivo."
    ))]
    #[schema(minimum = 1, example = 3)]
    pub capacidad: Option<i64>,

    #[validate(range(min = 1, message = "Precio inválido. Debe ser un número entero positivo."))]
    #[schema(minimum = 1, example = 650)]
    pub precio: Option<i64>,

    #[schema(example = false)]
    pub estado: Option<bool>,
}

impl UpdateRoomRequest {
    /// Reads an update request from a JSON object.
    ///
    /// Unknown keys, including `habitacion_id`, are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the message of the first field
    /// that has the wrong type or range.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, AppError> {
        let fields = Fields(body);

        let request = Self {
            num_habi: fields.integer("num_habi")?,
            tipo: fields.string("tipo")?,
            capacidad: fields.integer("capacidad")?,
            precio: fields.integer("precio")?,
            estado: fields.boolean("estado")?,
        };
        request.validate()?;

        Ok(request)
    }
}

impl From<UpdateRoomRequest> for RoomChanges {
    fn from(r: UpdateRoomRequest) -> Self {
        RoomChanges {
            num_habi: r.num_habi,
            tipo: r.tipo,
            capacidad: r.capacidad,
            precio: r.precio,
            estado: r.estado,
        }
    }
}

/// Largest integer a JSON client can send as a double without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Reads an integer, accepting a float with no fractional part (`101.0`).
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER)
            .map(|f| f as i64)
    })
}

/// Typed access to the fields of a JSON object.
struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    fn integer(&self, name: &str) -> Result<Option<i64>, AppError> {
        self.get(name)
            .map(|v| as_integer(v).ok_or_else(|| invalid(name)))
            .transpose()
    }

    fn string(&self, name: &str) -> Result<Option<String>, AppError> {
        self.get(name)
            .map(|v| v.as_str().map(str::to_owned).ok_or_else(|| invalid(name)))
            .transpose()
    }

    fn boolean(&self, name: &str) -> Result<Option<bool>, AppError> {
        self.get(name)
            .map(|v| v.as_bool().ok_or_else(|| invalid(name)))
            .transpose()
    }
}

fn invalid(field: &str) -> AppError {
    AppError::bad_request(invalid_field_message(field))
}
