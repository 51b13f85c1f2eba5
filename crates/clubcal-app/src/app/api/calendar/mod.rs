use salvo::Router;

use super::{CALENDAR_ROUTE_COMPONENT, FEED_ROUTE_COMPONENT};

mod feed;
mod response;


/// ## Summary
/// Routes `GET /calendar/{entity_type}/{entity_id}/feed`.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(CALENDAR_ROUTE_COMPONENT).push(
        Router::with_path("{entity_type}/{entity_id}")
            .push(Router::with_path(FEED_ROUTE_COMPONENT).get(feed::feed)),
    )
}
