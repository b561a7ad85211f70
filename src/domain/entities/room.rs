//! Room entity.

/// Message used wherever a lookup by `habitacion_id` finds no row.
pub const ROOM_NOT_FOUND: &str = "Habitación no encontrada";

/// A hotel room as stored in the `habitaciones` collection.
///
/// `habitacion_id` is assigned by the store and never changes. `num_habi` is the
/// human-facing room number and is expected to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub habitacion_id: i64,
    pub num_habi: i64,
    pub tipo: String,
    pub capacidad: i64,
    pub precio: i64,
    pub estado: bool,
}

/// Input data for creating a new room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub num_habi: i64,
    pub tipo: String,
    pub capacidad: i64,
    pub precio: i64,
    pub estado: bool,
}

impl NewRoom {
    /// Builds the stored row once the store has assigned an id.
    pub fn with_id(self, habitacion_id: i64) -> Room {
        Room {
            habitacion_id,
            num_habi: self.num_habi,
            tipo: self.tipo,
            capacidad: self.capacidad,
            precio: self.precio,
            estado: self.estado,
        }
    }
}

/// Partial update of a room.
///
/// All fields are optional. `None` leaves the stored value unchanged and is
/// never sent to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomChanges {
    pub num_habi: Option<i64>,
    pub tipo: Option<String>,
    pub capacidad: Option<i64>,
    pub precio: Option<i64>,
    pub estado: Option<bool>,
}

impl RoomChanges {
    /// Returns `true` when no column would change.
    pub fn is_empty(&self) -> bool {
        self.num_habi.is_none()
            && self.tipo.is_none()
            && self.capacidad.is_none()
            && self.precio.is_none()
            && self.estado.is_none()
    }

    /// Applies the changes to an in-memory copy of a row.
    pub fn apply_to(&self, room: &mut Room) {
        if let Some(num_habi) = self.num_habi {
            room.num_habi = num_habi;
        }
        if let Some(tipo) = &self.tipo {
            room.tipo = tipo.clone();
        }
        if let Some(capacidad) = self.capacidad {
            room.capacidad = capacidad;
        }
        if let Some(precio) = self.precio {
            room.precio = precio;
        }
        if let Some(estado) = self.estado {
            room.estado = estado;
        }
    }
}
