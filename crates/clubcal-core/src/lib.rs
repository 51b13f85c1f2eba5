//! Shared vocabulary for the clubcal workspace: entity types, route
//! constants, configuration loading and the core error type.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
