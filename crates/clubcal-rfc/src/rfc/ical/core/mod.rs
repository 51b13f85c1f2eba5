//! iCalendar core models (RFC 5545).
//!
//! These types describe the documents this workspace emits. They carry
//! enough structure to serialize deterministically: typed values decide
//! whether text escaping applies, and parameters travel with their property.

mod component;
mod datetime;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::{DateTime, DateTimeForm, UtcOffset};
pub use parameter::Parameter;
pub use property::{Property, names};
pub use value::Value;
