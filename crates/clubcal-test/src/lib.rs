//! clubcal feed server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `clubcal_test::` paths.

pub mod component {
    pub use clubcal_core::{constants, types, util};
    pub use clubcal_service::feed;

    pub mod error {
        pub use clubcal_core::error::*;
        pub use clubcal_service::error::*;
    }

    pub mod db {
        pub use clubcal_db::*;

        pub mod handler {
            pub use clubcal_app::datastore_handler::DatastoreHandler;
        }
    }

    pub mod config {
        pub use clubcal_app::config::ConfigHandler;
        pub use clubcal_core::config::*;
    }
}

pub mod app {
    pub use clubcal_app::*;

    pub mod api {
        pub use clubcal_app::app::api::*;
    }
}

pub use clubcal_rfc as rfc;
