//! Domain layer - address records, validation rules and store contract

pub mod address;
pub mod error;

pub use address::{
    validate_address, Address, AddressFields, AddressId, AddressStore, AddressValidationError,
    NewAddress, Zip,
};
pub use error::DomainError;
