//! Address book endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

use crate::api::middleware::RequireApiToken;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Address, AddressFields};

/// GET /address
pub async fn list_addresses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Address>>, ApiError> {
    let addresses = state.address_service.list().await?;

    debug!(count = addresses.len(), "Listing addresses");
    Ok(Json(addresses))
}

/// POST /address
pub async fn create_address(
    State(state): State<AppState>,
    _: RequireApiToken,
    Json(fields): Json<AddressFields>,
) -> Result<impl IntoResponse, ApiError> {
    let address = state.address_service.create(fields).await?;
    let location = state.address_location(address.id().as_str());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(address),
    ))
}

/// DELETE /address/{id}
///
/// Answers 204 whether or not the address existed.
pub async fn delete_address(
    State(state): State<AppState>,
    _: RequireApiToken,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.address_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
