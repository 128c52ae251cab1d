//! In-memory address store

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{Address, AddressStore, DomainError};

/// Thread-safe in-memory address store
///
/// Records keep their insertion order. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryAddressStore {
    addresses: RwLock<Vec<Address>>,
}

impl InMemoryAddressStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records, in the given order
    pub fn with_addresses(addresses: Vec<Address>) -> Self {
        Self {
            addresses: RwLock::new(addresses),
        }
    }
}

#[async_trait]
impl AddressStore for InMemoryAddressStore {
    async fn list(&self) -> Result<Vec<Address>, DomainError> {
        let addresses = self.addresses.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(addresses.clone())
    }

    async fn append(&self, address: Address) -> Result<(), DomainError> {
        let mut addresses = self.addresses.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        addresses.push(address);
        Ok(())
    }

    async fn remove_by_id(&self, id: &str) -> Result<bool, DomainError> {
        let mut addresses = self.addresses.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match addresses.iter().position(|a| a.id().as_str() == id) {
            Some(index) => {
                addresses.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
