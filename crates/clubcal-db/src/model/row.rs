//! Stored record shapes, shared by the `PostgreSQL` and fixture adapters.

use chrono::{DateTime, Utc};
use diesel::{pg::Pg, prelude::*};
use serde::Deserialize;

use crate::db::{enums::Visibility, schema};

/// A row of the `organization` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Deserialize)]
#[diesel(table_name = schema::organization)]
#[diesel(check_for_backend(Pg))]
pub struct OrganizationRow {
    pub id: String,
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// A row of the `event` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Deserialize)]
#[diesel(table_name = schema::event)]
#[diesel(check_for_backend(Pg))]
pub struct EventRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub visibility: Visibility,
    pub entity_kind: String,
    pub entity_id: String,
    #[serde(default)]
    pub club_id: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub district_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventRow {
    /// Returns the ids of every organization this row references as a tag.
    #[must_use]
    pub fn tag_ids(&self) -> Vec<&str> {
        [&self.club_id, &self.zone_id, &self.district_id]
            .into_iter()
            .filter_map(Option::as_deref)
            .collect()
    }
}
