//! Application state for shared services

use std::sync::Arc;

use crate::config::Environment;
use crate::domain::{Address, AddressFields, AddressStore, DomainError};
use crate::infrastructure::address::AddressService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub address_service: Arc<dyn AddressServiceTrait>,
    /// Bearer secret for mutating routes; `None` rejects every mutating request
    pub api_token: Option<Arc<str>>,
    pub environment: Environment,
    /// Base URL prefixed to `Location` headers
    pub public_url: Option<Arc<str>>,
}

impl AppState {
    /// Path (or absolute URL when a public URL is configured) of an address
    pub fn address_location(&self, id: &str) -> String {
        match &self.public_url {
            Some(base) => format!("{}/address/{}", base.trim_end_matches('/'), id),
            None => format!("/address/{}", id),
        }
    }
}

/// Trait for address service operations
#[async_trait::async_trait]
pub trait AddressServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Address>, DomainError>;
    async fn create(&self, fields: AddressFields) -> Result<Address, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

#[async_trait::async_trait]
impl<S: AddressStore + 'static> AddressServiceTrait for AddressService<S> {
    async fn list(&self) -> Result<Vec<Address>, DomainError> {
        AddressService::list(self).await
    }

    async fn create(&self, fields: AddressFields) -> Result<Address, DomainError> {
        AddressService::create(self, fields).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        AddressService::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::address::InMemoryAddressStore;

    fn state_with_url(public_url: Option<&str>) -> AppState {
        AppState {
            address_service: Arc::new(AddressService::new(Arc::new(InMemoryAddressStore::new()))),
            api_token: None,
            environment: Environment::Development,
            public_url: public_url.map(Arc::from),
        }
    }

    #[test]
    fn test_address_location_relative() {
        let state = state_with_url(None);
        assert_eq!(state.address_location("abc"), "/address/abc");
    }

    #[test]
    fn test_address_location_absolute() {
        let state = state_with_url(Some("http://localhost:8000/"));
        assert_eq!(
            state.address_location("abc"),
            "http://localhost:8000/address/abc"
        );
    }
}
