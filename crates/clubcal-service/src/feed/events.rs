//! Event selection.

use clubcal_core::types::EntityType;
use clubcal_db::model::{Event, Visibility};
use clubcal_db::store::EventStore;

use crate::error::ServiceResult;

/// ## Summary
/// Lists the public events directly associated with `(kind, id)`.
///
/// Events of child entities are never included. Rows the store returns that
/// are not public or belong to another entity are dropped.
///
/// ## Errors
/// Returns `UpstreamFetchError` if the event store cannot be queried.
pub async fn list_events<S>(store: &S, kind: EntityType, id: &str) -> ServiceResult<Vec<Event>>
where
    S: EventStore + ?Sized,
{
    let fetched = store.public_events(kind, id).await?;
    let total = fetched.len();

    let events: Vec<Event> = fetched
        .into_iter()
        .filter(|e| e.visibility == Visibility::Public && e.entity_kind == kind && e.entity_id == id)
        .collect();

    if events.len() != total {
        tracing::warn!(
            entity_type = %kind,
            entity_id = %id,
            dropped = total - events.len(),
            "Event store returned events outside the requested scope"
        );
    }
    tracing::debug!(entity_type = %kind, entity_id = %id, count = events.len(), "Events selected");

    Ok(events)
}
