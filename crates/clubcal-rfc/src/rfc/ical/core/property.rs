//! iCalendar property types (RFC 5545 §3.1, §3.8).

use super::{DateTime, Parameter, UtcOffset, Value};

/// Property names emitted by the feed serializer.
pub mod names {
    pub const VERSION: &str = "VERSION";
    pub const PRODID: &str = "PRODID";
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";
    pub const X_WR_CALNAME: &str = "X-WR-CALNAME";
    pub const X_WR_TIMEZONE: &str = "X-WR-TIMEZONE";

    pub const UID: &str = "UID";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const DTSTART: &str = "DTSTART";
    pub const DTEND: &str = "DTEND";
    pub const SUMMARY: &str = "SUMMARY";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const LOCATION: &str = "LOCATION";
    pub const URL: &str = "URL";
    pub const CREATED: &str = "CREATED";
    pub const LAST_MODIFIED: &str = "LAST-MODIFIED";

    pub const TZID: &str = "TZID";
    pub const TZNAME: &str = "TZNAME";
    pub const TZOFFSETFROM: &str = "TZOFFSETFROM";
    pub const TZOFFSETTO: &str = "TZOFFSETTO";
}

/// An iCalendar property.
///
/// `raw_value` is the value as it appears on the wire before TEXT escaping;
/// for non-text values it is the exact serialized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of insertion.
    pub params: Vec<Parameter>,
    /// Typed value.
    pub value: Value,
    /// Unescaped string form of the value.
    pub raw_value: String,
}

impl Property {
    fn build(name: impl Into<String>, value: Value, raw_value: String) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
            raw_value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self::build(name, Value::Text(value_str.clone()), value_str)
    }

    /// Creates a property whose value is written verbatim.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self::build(name, Value::Raw(value_str.clone()), value_str)
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self::build(name, Value::Uri(value_str.clone()), value_str)
    }

    /// Creates a property with a datetime value.
    ///
    /// Zoned values carry their `TZID` parameter.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        let raw = dt.to_string();
        let tzid = dt.tzid().map(Parameter::tzid);
        let mut prop = Self::build(name, Value::DateTime(dt), raw);
        if let Some(param) = tzid {
            prop.add_param(param);
        }
        prop
    }

    /// Creates a property with a UTC offset value.
    #[must_use]
    pub fn utc_offset(name: impl Into<String>, offset: UtcOffset) -> Self {
        let raw = offset.to_string();
        Self::build(name, Value::UtcOffset(offset), raw)
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns `true` when the value is subject to TEXT escaping.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.value, Value::Text(_))
    }
}
