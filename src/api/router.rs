use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::address;
use super::middleware::{
    error_handler_middleware, logging_middleware, panic_response, security_headers_middleware,
};
use super::state::AppState;

/// Create the address book router with the full middleware stack
///
/// Layers run outermost first: request id, tracing, request logging, security
/// headers, CORS, then the error handler wrapping panic recovery.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/address",
            get(address::list_addresses).post(address::create_address),
        )
        .route("/address/{id}", delete(address::delete_address))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_handler_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
