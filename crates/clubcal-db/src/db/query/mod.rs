//! Query builders, one module per table.

pub mod event;
pub mod organization;
