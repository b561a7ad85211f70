//! Infrastructure layer for the remote data store.
//!
//! Both modules implement [`crate::domain::repositories::RoomRepository`]; the
//! server picks one at startup from the configuration.
//!
//! # Modules
//!
//! - [`postgrest`] - Hosted store reached through its REST interface
//! - [`persistence`] - Direct PostgreSQL connection via SQLx

pub mod persistence;
pub mod postgrest;
