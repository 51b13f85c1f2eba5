//! End-to-end feed assembly.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clubcal_core::config::FeedConfig;
use clubcal_core::constants::{DEFAULT_PRODUCT_ID, DEFAULT_UID_DOMAIN};
use clubcal_core::error::CoreResult;
use clubcal_core::types::EntityType;
use clubcal_db::store::Datastore;
use tracing_futures::Instrument;

use super::entity::{parse_entity_type, resolve_entity};
use super::events::list_events;
use super::render::{ResolvedFeed, render};
use super::timezone::{TimezoneContext, resolve_timezone};
use crate::error::{ServiceError, ServiceResult};

/// Feed rendering options derived from configuration.
#[derive(Debug, Clone)]
pub struct FeedOptions {
    pub product_id: String,
    /// Domain appended to event ids to form `UID`s.
    pub uid_domain: String,
    pub default_tz: Tz,
}

impl FeedOptions {
    /// ## Summary
    /// Builds options from the `feed` configuration section.
    ///
    /// ## Errors
    /// Returns an error if the configured default timezone is unknown.
    pub fn from_config(config: &FeedConfig) -> CoreResult<Self> {
        Ok(Self {
            product_id: config.product_id.clone(),
            uid_domain: config.uid_domain.clone(),
            default_tz: config.default_tz()?,
        })
    }
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            default_tz: chrono_tz::America::Toronto,
        }
    }
}

/// A rendered feed document with the facts the HTTP layer reports.
#[derive(Debug, Clone)]
pub struct RenderedFeed {
    pub entity_name: String,
    pub timezone: Option<Tz>,
    pub event_count: usize,
    pub body: String,
}

fn log_failure(stage: &'static str, entity_type: &str, entity_id: &str, error: &ServiceError) {
    match error {
        ServiceError::InvalidEntityType(_) | ServiceError::EntityNotFound { .. } => {
            tracing::warn!(stage, entity_type, entity_id, %error, "Feed request rejected");
        }
        ServiceError::UpstreamFetchError(_) | ServiceError::SerializationError(_) => {
            tracing::error!(stage, entity_type, entity_id, %error, "Feed generation failed");
        }
    }
}

/// ## Summary
/// Builds the iCalendar feed for an entity.
///
/// The entity type is validated before any lookup. The entity and its
/// events are fetched concurrently; when the entity is missing the event
/// result is discarded.
///
/// ## Errors
/// - `InvalidEntityType` if `entity_type` is not a known type
/// - `EntityNotFound` if the directory has no such entity
/// - `UpstreamFetchError` if either collaborator fails
/// - `SerializationError` if an event ends before it starts
#[tracing::instrument(skip(store, options, generated_at))]
pub async fn build_feed<S>(
    store: &S,
    entity_type: &str,
    entity_id: &str,
    options: &FeedOptions,
    generated_at: DateTime<Utc>,
) -> ServiceResult<RenderedFeed>
where
    S: Datastore + ?Sized,
{
    let kind: EntityType = parse_entity_type(entity_type)
        .inspect_err(|e| log_failure("validate", entity_type, entity_id, e))?;

    let (entity, events) = tokio::try_join!(
        resolve_entity(store, kind, entity_id).instrument(tracing::debug_span!("resolve_entity")),
        list_events(store, kind, entity_id).instrument(tracing::debug_span!("list_events")),
    )
    .inspect_err(|e| log_failure("fetch", entity_type, entity_id, e))?;

    let timezone = resolve_timezone(&TimezoneContext {
        entity_type: kind,
        entity: &entity,
        events: &events,
        default_tz: options.default_tz,
    });

    let feed = ResolvedFeed {
        entity_name: entity.name,
        timezone,
        events,
    };
    let body = render(&feed, options, generated_at)
        .inspect_err(|e| log_failure("serialize", entity_type, entity_id, e))?;

    tracing::debug!(
        events = feed.events.len(),
        octets = body.len(),
        "Feed rendered"
    );

    Ok(RenderedFeed {
        entity_name: feed.entity_name,
        timezone: feed.timezone,
        event_count: feed.events.len(),
        body,
    })
}
