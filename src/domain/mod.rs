//! Domain layer containing the room entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data store trait implemented by the infrastructure layer
//!
//! Entities are plain data with no store or HTTP types. Repository methods
//! report failures as [`crate::error::AppError`], the crate-wide error that
//! also carries the HTTP status mapping and the conversions from the store
//! clients' errors.

pub mod entities;
pub mod repositories;
