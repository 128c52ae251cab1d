//! API middleware components

pub mod auth;
pub mod error;
pub mod logging;
pub mod security;

pub use auth::{RequireApiToken, UNAUTHORIZED_MESSAGE};
pub use error::{error_handler_middleware, panic_response, render_fault};
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
