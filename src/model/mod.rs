//! Request and response DTOs exchanged over the HTTP API.

pub mod api;
pub mod record;
