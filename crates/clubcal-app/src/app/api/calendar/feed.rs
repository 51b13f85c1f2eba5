//! `GET /calendar/{entity_type}/{entity_id}/feed`

use chrono::Utc;
use clubcal_service::feed::{FeedOptions, build_feed};
use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};

use super::response::{add_cors_headers, status_for, write_error, write_feed};
use crate::config::get_config_from_depot;
use crate::datastore_handler::get_datastore_from_depot;

/// ## Summary
/// Serves the iCalendar feed of an entity's public events.
///
/// ## Errors
/// Returns HTTP 400 for an unknown entity type, 404 for a missing entity,
/// and 500 when a collaborator or serialization fails. Error bodies are
/// JSON `{"error": ...}`.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn feed(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    add_cors_headers(res);

    let entity_type = req.param::<String>("entity_type").unwrap_or_default();
    let entity_id = req.param::<String>("entity_id").unwrap_or_default();

    let (store, settings) = match (get_datastore_from_depot(depot), get_config_from_depot(depot)) {
        (Ok(store), Ok(settings)) => (store, settings),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "Feed handler missing depot state");
            write_error(res, StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            return;
        }
    };

    let options = match FeedOptions::from_config(&settings.feed) {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "Invalid feed configuration");
            write_error(res, StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            return;
        }
    };

    match build_feed(store.as_ref(), &entity_type, &entity_id, &options, Utc::now()).await {
        Ok(rendered) => {
            tracing::info!(
                entity_type = %entity_type,
                entity_id = %entity_id,
                events = rendered.event_count,
                timezone = rendered.timezone.map_or("UTC", |tz| tz.name()),
                "Serving calendar feed"
            );
            write_feed(res, rendered, settings.feed.cache_max_age_secs);
        }
        Err(e) => write_error(res, status_for(&e), e.to_string()),
    }
}
