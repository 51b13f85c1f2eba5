//! HTTP surface of the calendar feed server.

pub mod app;
pub mod config;
pub mod datastore_handler;
pub mod error;
