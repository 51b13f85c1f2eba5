//! Typed property values.

use super::{DateTime, UtcOffset};

/// A property value.
///
/// Only `Text` is subject to TEXT escaping when serialized; every other
/// variant is written verbatim from the property's raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// TEXT (RFC 5545 §3.3.11).
    Text(String),
    /// URI (RFC 5545 §3.3.13).
    Uri(String),
    /// DATE-TIME (RFC 5545 §3.3.5).
    DateTime(DateTime),
    /// UTC-OFFSET (RFC 5545 §3.3.14).
    UtcOffset(UtcOffset),
    /// Structured value written exactly as given (identifiers, enumerations).
    Raw(String),
}

impl Value {
    /// Returns the text if this is a TEXT value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}
