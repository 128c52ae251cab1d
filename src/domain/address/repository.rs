//! Address store trait

use async_trait::async_trait;

use super::entity::Address;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Ordered collection of address records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Lists all records in insertion order
    async fn list(&self) -> Result<Vec<Address>, DomainError>;

    /// Appends an already validated record
    async fn append(&self, address: Address) -> Result<(), DomainError>;

    /// Removes the record with the given identifier.
    ///
    /// Returns whether a record was removed; an unknown identifier is not an error.
    async fn remove_by_id(&self, id: &str) -> Result<bool, DomainError>;
}
