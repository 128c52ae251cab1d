//! API error types
//!
//! Client errors (4xx) are answered in plain text. Server errors (5xx) carry a
//! generic JSON body plus a [`ServerFault`] extension that the error handler
//! middleware turns into the final response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Message shown to clients when error detail is suppressed
pub const GENERIC_SERVER_ERROR: &str = "server error";

/// Body of a 500 response with detail suppressed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerErrorResponse {
    pub error: ServerErrorMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerErrorMessage {
    pub message: String,
}

impl ServerErrorResponse {
    pub fn generic() -> Self {
        Self {
            error: ServerErrorMessage {
                message: GENERIC_SERVER_ERROR.to_string(),
            },
        }
    }
}

/// Server-side failure attached to a 5xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerFault {
    pub kind: String,
    pub message: String,
    pub detail: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub fault: Option<ServerFault>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            fault: None,
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Internal server error
    pub fn internal(kind: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            fault: Some(ServerFault {
                kind: kind.into(),
                message: message.clone(),
                detail: message.clone(),
            }),
            message,
        }
    }

    /// Attach detail to a server fault
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        if let Some(fault) = self.fault.as_mut() {
            fault.detail = detail.into();
        }
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if !self.status.is_server_error() {
            return (self.status, self.message).into_response();
        }

        let mut response = (self.status, Json(ServerErrorResponse::generic())).into_response();

        if let Some(fault) = self.fault {
            response.extensions_mut().insert(fault);
        }

        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let detail = format!("{:?}", err);

        match err {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Storage { message } => Self::internal("storage", message).with_detail(detail),
            DomainError::Internal { message } => {
                Self::internal("internal", message).with_detail(detail)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}
