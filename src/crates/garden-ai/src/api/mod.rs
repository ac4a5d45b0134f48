//! HTTP API: routes, handlers, DTOs, and error conversion.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validation;
