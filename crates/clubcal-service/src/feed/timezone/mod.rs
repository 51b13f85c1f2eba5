//! Display timezone policy.
//!
//! The event store records UTC instants and a province at best, so the
//! feed's timezone is inferred by an ordered list of strategies. The first
//! strategy to decide wins; `None` means times are rendered in UTC.

use chrono_tz::Tz;
use clubcal_core::types::EntityType;
use clubcal_db::model::{Entity, Event};

use super::province::timezone_for_province;

/// Outcome of a single strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The strategy has no opinion; consult the next one.
    Continue,
    /// The strategy decided; `None` renders in UTC.
    Decided(Option<Tz>),
}

/// Inputs shared by every strategy.
#[derive(Debug, Clone, Copy)]
pub struct TimezoneContext<'a> {
    pub entity_type: EntityType,
    pub entity: &'a Entity,
    pub events: &'a [Event],
    /// Zone used for clubs and zones without any province evidence.
    pub default_tz: Tz,
}

pub type Strategy = fn(&TimezoneContext<'_>) -> Decision;

/// District and national entities may cover several provinces: always UTC.
#[must_use]
pub fn spanning_entity(ctx: &TimezoneContext<'_>) -> Decision {
    if ctx.entity_type.spans_provinces() {
        Decision::Decided(None)
    } else {
        Decision::Continue
    }
}

/// The nearest ancestor province the table knows.
///
/// A club under a zone reaches past the zone to its district.
#[must_use]
pub fn ancestor_province(ctx: &TimezoneContext<'_>) -> Decision {
    ctx.entity
        .ancestor_provinces()
        .find_map(timezone_for_province)
        .map_or(Decision::Continue, |tz| Decision::Decided(Some(tz)))
}

/// The first mappable province tagged on an event, in event order.
///
/// Within an event the club tag is consulted before the zone and district tags.
#[must_use]
pub fn event_province(ctx: &TimezoneContext<'_>) -> Decision {
    ctx.events
        .iter()
        .flat_map(|event| event.tags.iter())
        .find_map(|tag| tag.province.as_deref().and_then(timezone_for_province))
        .map_or(Decision::Continue, |tz| Decision::Decided(Some(tz)))
}

/// Clubs and zones are assumed to sit in a single place.
#[must_use]
pub fn local_default(ctx: &TimezoneContext<'_>) -> Decision {
    if ctx.entity_type.is_local() {
        Decision::Decided(Some(ctx.default_tz))
    } else {
        Decision::Continue
    }
}

/// Anything left renders in UTC.
#[must_use]
pub fn fallback_utc(_ctx: &TimezoneContext<'_>) -> Decision {
    Decision::Decided(None)
}

/// Strategies in evaluation order.
pub const STRATEGIES: [(&str, Strategy); 5] = [
    ("spanning_entity", spanning_entity),
    ("ancestor_province", ancestor_province),
    ("event_province", event_province),
    ("local_default", local_default),
    ("fallback_utc", fallback_utc),
];

/// Resolves the display timezone for a feed.
#[must_use]
pub fn resolve_timezone(ctx: &TimezoneContext<'_>) -> Option<Tz> {
    for (name, strategy) in STRATEGIES {
        if let Decision::Decided(tz) = strategy(ctx) {
            tracing::debug!(
                entity_type = %ctx.entity_type,
                entity_id = %ctx.entity.id,
                strategy = name,
                timezone = tz.map_or("UTC", |tz| tz.name()),
                "Timezone resolved"
            );
            return tz;
        }
    }
    None
}
