//! RFC 5545 building blocks for calendar feeds.

pub mod rfc;
