//! Bearer token check for mutating routes

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Message returned for every failed token check
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";

/// Extractor that requires the configured API token
///
/// The credential is the second whitespace-separated token of the
/// `Authorization` header, usually `Bearer <token>`.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiToken;

impl FromRequestParts<AppState> for RequireApiToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.api_token.as_deref() else {
            warn!("No API token configured; rejecting mutating request");
            return Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE));
        };

        match extract_bearer_credential(&parts.headers) {
            Some(presented) if presented == expected => Ok(RequireApiToken),
            Some(_) => {
                debug!("API token mismatch");
                Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE))
            }
            None => {
                debug!("Missing or malformed Authorization header");
                Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE))
            }
        }
    }
}

fn extract_bearer_credential(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
}
