//! Calendar feed synthesis: entity resolution, event selection, timezone
//! policy and iCalendar rendering.

pub mod error;
pub mod feed;
