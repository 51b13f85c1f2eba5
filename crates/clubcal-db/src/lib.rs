//! Data model and read-only datastore collaborators for calendar feeds.
//!
//! - `model`: domain types handed to the feed pipeline
//! - `store`: the `Directory` and `EventStore` collaborator traits
//! - `db`: `PostgreSQL` adapter
//! - `fixture`: in-memory adapter loaded from JSON

pub mod db;
pub mod error;
pub mod fixture;
pub mod model;
pub mod store;
