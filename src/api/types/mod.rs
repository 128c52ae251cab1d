//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod json;

pub use error::{ApiError, ServerErrorResponse, ServerFault, GENERIC_SERVER_ERROR};
pub use json::Json;
