//! Address Book API
//!
//! A small JSON-over-HTTP service holding address records in memory:
//! - List addresses in insertion order
//! - Create addresses with field validation (bearer token required)
//! - Delete addresses by identifier (bearer token required)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::warn;

use api::state::AppState;
use domain::{Address, AddressId, NewAddress, Zip};
use infrastructure::address::{AddressService, InMemoryAddressStore};

/// Build application state from configuration, with the store seeded
pub fn create_app_state(config: &AppConfig) -> AppState {
    let store = Arc::new(InMemoryAddressStore::with_addresses(vec![seed_address()]));

    if config.api_token.is_none() {
        warn!("APP__API_TOKEN is not set; all mutating requests will be rejected");
    }

    AppState {
        address_service: Arc::new(AddressService::new(store)),
        api_token: config.api_token.as_deref().map(Arc::from),
        environment: config.environment,
        public_url: config.server.public_url.as_deref().map(Arc::from),
    }
}

/// The record every fresh store starts with
pub fn seed_address() -> Address {
    Address::new(
        AddressId::generate(),
        NewAddress {
            first_name: "Bob".to_string(),
            last_name: "Test".to_string(),
            address1: "123 Main Street".to_string(),
            address2: Some("apt 1".to_string()),
            city: "SLC".to_string(),
            state: "UT".to_string(),
            zip: Zip::number(84123),
        },
    )
}
