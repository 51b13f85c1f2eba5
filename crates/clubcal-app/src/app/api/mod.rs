mod app_specific;
mod calendar;

use salvo::Router;

pub use clubcal_core::constants::{
    APP_ROUTE_COMPONENT, CALENDAR_ROUTE_COMPONENT, FEED_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the router for every public endpoint.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(app_specific::routes())
        .push(calendar::routes())
}
