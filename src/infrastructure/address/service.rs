//! Address service - list, create and delete address records

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    validate_address, Address, AddressFields, AddressId, AddressStore, DomainError,
};

/// Address service over an address store
#[derive(Debug)]
pub struct AddressService<S: AddressStore> {
    store: Arc<S>,
}

impl<S: AddressStore> AddressService<S> {
    /// Create a new AddressService with the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List all addresses in insertion order
    pub async fn list(&self) -> Result<Vec<Address>, DomainError> {
        self.store.list().await
    }

    /// Validate the submitted fields and store a new address.
    ///
    /// Nothing is stored unless every check passes.
    pub async fn create(&self, fields: AddressFields) -> Result<Address, DomainError> {
        let new_address = validate_address(fields)?;
        let address = Address::new(AddressId::generate(), new_address);

        self.store.append(address.clone()).await?;

        info!(address_id = %address.id(), "Address created");
        Ok(address)
    }

    /// Delete an address by identifier, returning whether it existed
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let removed = self.store.remove_by_id(id).await?;

        if removed {
            info!(address_id = %id, "Address deleted");
        } else {
            debug!(address_id = %id, "Delete requested for unknown address");
        }

        Ok(removed)
    }
}
