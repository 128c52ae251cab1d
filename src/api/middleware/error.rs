//! Terminal error handling for server faults
//!
//! Any 5xx response is rewritten here. Production answers with a generic body;
//! development logs the fault and returns its message and detail.

use std::any::Any;

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ServerErrorResponse, ServerFault};
use crate::config::Environment;

/// Largest unmarked error body read back as fault detail
const MAX_FAULT_BODY: usize = 64 * 1024;

/// Body of a 500 response in development mode
#[derive(Debug, Serialize)]
pub struct DetailedErrorResponse {
    pub message: String,
    pub error: ServerFault,
}

/// Middleware that renders every server error according to the deployment mode
pub async fn error_handler_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let fault = match parts.extensions.get::<ServerFault>() {
        Some(fault) => fault.clone(),
        None => unmarked_fault(parts.status, body).await,
    };

    render_fault(state.environment, fault)
}

/// Build the final 500 response for a fault
pub fn render_fault(environment: Environment, fault: ServerFault) -> Response {
    if environment.is_production() {
        error!(kind = %fault.kind, "Request failed with server error");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ServerErrorResponse::generic()),
        )
            .into_response();
    }

    error!(kind = %fault.kind, detail = %fault.detail, "{}", fault.message);

    let body = DetailedErrorResponse {
        message: fault.message.clone(),
        error: fault,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Turn a handler panic into a server fault response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal("panic", message).into_response()
}

async fn unmarked_fault(status: StatusCode, body: Body) -> ServerFault {
    let detail = match to_bytes(body, MAX_FAULT_BODY).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => format!("unreadable error body: {}", e),
    };

    ServerFault {
        kind: "unhandled".to_string(),
        message: status
            .canonical_reason()
            .unwrap_or("Internal Server Error")
            .to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{middleware, routing::get, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    use crate::infrastructure::address::{AddressService, InMemoryAddressStore};

    async fn panicking_handler() -> &'static str {
        panic!("boom")
    }

    fn app(environment: Environment) -> Router {
        let state = AppState {
            address_service: Arc::new(AddressService::new(Arc::new(InMemoryAddressStore::new()))),
            api_token: None,
            environment,
            public_url: None,
        };

        Router::new()
            .route(
                "/fault",
                get(|| async { ApiError::internal("storage", "lock poisoned") }),
            )
            .route(
                "/bad",
                get(|| async { ApiError::bad_request("City is required") }),
            )
            .route(
                "/raw",
                get(|| async { (StatusCode::BAD_GATEWAY, "upstream went away") }),
            )
            .route("/panic", get(panicking_handler))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                error_handler_middleware,
            ))
            .with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_production_hides_detail() {
        let (status, body) = get_json(app(Environment::Production), "/fault").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": { "message": "server error" } }));
    }

    #[tokio::test]
    async fn test_development_exposes_detail() {
        let (status, body) = get_json(app(Environment::Development), "/fault").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!("lock poisoned"));
        assert_eq!(body["error"]["kind"], json!("storage"));
    }

    #[tokio::test]
    async fn test_panic_becomes_server_error() {
        let (status, body) = get_json(app(Environment::Development), "/panic").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!("boom"));
        assert_eq!(body["error"]["kind"], json!("panic"));
    }

    #[tokio::test]
    async fn test_unmarked_server_error_is_rewritten() {
        let (status, body) = get_json(app(Environment::Development), "/raw").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["detail"], json!("upstream went away"));
    }

    #[tokio::test]
    async fn test_client_errors_pass_through() {
        let response = app(Environment::Production)
            .oneshot(Request::builder().uri("/bad").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"City is required");
    }
}
