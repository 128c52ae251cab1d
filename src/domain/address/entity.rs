//! Address entity and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned address identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(String);

impl AddressId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zip code as submitted: either a JSON number or a string.
///
/// The submitted JSON type is kept so the record serializes back the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Zip {
    Number(serde_json::Number),
    Text(String),
}

impl Zip {
    pub fn number(value: u32) -> Self {
        Self::Number(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// An empty string or a numeric zero counts as no zip at all
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Length of the zip in its textual form, in UTF-16 code units
    pub fn rendered_len(&self) -> usize {
        match self {
            Self::Number(n) => n.to_string().encode_utf16().count(),
            Self::Text(s) => s.encode_utf16().count(),
        }
    }
}

/// Unvalidated address fields as submitted by a client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<Zip>,
}

/// Address fields that passed validation, waiting for an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: Zip,
}

/// A stored address record. Records are never updated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    id: AddressId,
    first_name: String,
    last_name: String,
    address1: String,
    address2: Option<String>,
    city: String,
    state: String,
    zip: Zip,
}

impl Address {
    /// Create a record from validated fields and its identifier
    pub fn new(id: AddressId, fields: NewAddress) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            address1: fields.address1,
            address2: fields.address2,
            city: fields.city,
            state: fields.state,
            zip: fields.zip,
        }
    }

    pub fn id(&self) -> &AddressId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address1(&self) -> &str {
        &self.address1
    }

    pub fn address2(&self) -> Option<&str> {
        self.address2.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &Zip {
        &self.zip
    }
}
