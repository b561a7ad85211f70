//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request/response types and input validation
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`openapi`] - Generated API description
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
