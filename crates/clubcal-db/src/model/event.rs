use chrono::{DateTime, Utc};
use clubcal_core::types::EntityType;

use super::EntityRef;

pub use crate::db::enums::Visibility;

/// The club, zone and district associations an event was tagged with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTags {
    pub club: Option<EntityRef>,
    pub zone: Option<EntityRef>,
    pub district: Option<EntityRef>,
}

impl EventTags {
    /// Iterates the present tags in club, zone, district order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        [&self.club, &self.zone, &self.district]
            .into_iter()
            .flatten()
    }
}

/// A published event. Timestamps are UTC instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub visibility: Visibility,
    /// The entity the event is directly associated with.
    pub entity_kind: EntityType,
    pub entity_id: String,
    pub tags: EventTags,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Returns `true` when the event's end does not precede its start.
    #[must_use]
    pub fn has_valid_period(&self) -> bool {
        self.ends_at >= self.starts_at
    }
}
