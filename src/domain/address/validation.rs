//! Address validation
//!
//! Checks run in a fixed order and stop at the first failure.

use thiserror::Error;

use super::entity::{AddressFields, NewAddress, Zip};

/// Errors that can occur during address validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AddressValidationError {
    #[error("First name is required")]
    MissingFirstName,

    #[error("Last name is required")]
    MissingLastName,

    #[error("Address line 1 is required")]
    MissingAddress1,

    #[error("City is required")]
    MissingCity,

    #[error("State is required")]
    MissingState,

    #[error("Zip is required")]
    MissingZip,

    #[error("Please provide a valid state code")]
    InvalidState,

    #[error("Please provide a valid zip code")]
    InvalidZip,
}

const STATE_CODE_LENGTH: usize = 2;
const ZIP_CODE_LENGTH: usize = 5;

/// Validate submitted fields and turn them into a new address
pub fn validate_address(fields: AddressFields) -> Result<NewAddress, AddressValidationError> {
    let first_name = required(fields.first_name, AddressValidationError::MissingFirstName)?;
    let last_name = required(fields.last_name, AddressValidationError::MissingLastName)?;
    let address1 = required(fields.address1, AddressValidationError::MissingAddress1)?;
    let city = required(fields.city, AddressValidationError::MissingCity)?;
    let state = required(fields.state, AddressValidationError::MissingState)?;
    let zip = fields
        .zip
        .filter(|zip| !zip.is_blank())
        .ok_or(AddressValidationError::MissingZip)?;

    validate_state(&state)?;
    validate_zip(&zip)?;

    Ok(NewAddress {
        first_name,
        last_name,
        address1,
        address2: fields.address2,
        city,
        state,
        zip,
    })
}

/// A state code is exactly two UTF-16 code units long
pub fn validate_state(state: &str) -> Result<(), AddressValidationError> {
    if state.encode_utf16().count() != STATE_CODE_LENGTH {
        return Err(AddressValidationError::InvalidState);
    }

    Ok(())
}

/// A zip passes when it is numeric (any length) or five characters long
pub fn validate_zip(zip: &Zip) -> Result<(), AddressValidationError> {
    if zip.rendered_len() != ZIP_CODE_LENGTH && !zip.is_number() {
        return Err(AddressValidationError::InvalidZip);
    }

    Ok(())
}

fn required(
    value: Option<String>,
    missing: AddressValidationError,
) -> Result<String, AddressValidationError> {
    value.filter(|v| !v.is_empty()).ok_or(missing)
}
