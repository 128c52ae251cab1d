//! Address domain module
//!
//! An address record is created once from validated client input and never
//! updated afterwards; it leaves the store only through deletion.

mod entity;
mod repository;
mod validation;

pub use entity::{Address, AddressFields, AddressId, NewAddress, Zip};
pub use repository::AddressStore;
#[cfg(test)]
pub use repository::MockAddressStore;
pub use validation::{validate_address, validate_state, validate_zip, AddressValidationError};
