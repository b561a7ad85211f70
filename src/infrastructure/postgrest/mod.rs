//! Client for a hosted store exposed through PostgREST (e.g. Supabase).
//!
//! - [`client`] - HTTP client carrying the base URL and API key
//! - [`response`] - Shared response decoding and error mapping
//! - [`room_repository`] - [`PostgrestRoomRepository`], the `habitaciones` table

pub mod client;
pub mod response;
pub mod room_repository;

pub use client::PostgrestClient;
pub use room_repository::PostgrestRoomRepository;
