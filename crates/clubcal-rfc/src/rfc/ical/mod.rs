//! iCalendar (RFC 5545) document model and serialization.
//!
//! - `core`: components, properties, parameters and typed values
//! - `build`: escaping, folding, serialization and `VTIMEZONE` synthesis
//! - `parse`: the inverse text transforms (unfolding, unescaping)

pub mod build;
pub mod core;
pub mod parse;
