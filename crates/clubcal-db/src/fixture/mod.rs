//! In-memory collaborators loaded from a JSON document.
//!
//! The document uses the stored record shapes:
//!
//! ```json
//! {
//!   "organizations": [{ "id": "d1", "name": "District 1", "kind": "district" }],
//!   "events": []
//! }
//! ```

use std::path::Path;

use clubcal_core::types::EntityType;
use futures::future::BoxFuture;
use serde::Deserialize;

use crate::error::{DbResult, FixtureError};
use crate::model::assemble::{self, OrganizationMap};
use crate::model::row::{EventRow, OrganizationRow};
use crate::model::{Entity, Event, Visibility};
use crate::store::{Directory, EventStore};

#[derive(Debug, Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    organizations: Vec<OrganizationRow>,
    #[serde(default)]
    events: Vec<EventRow>,
}

/// Directory and event store holding all records in memory.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    organizations: OrganizationMap,
    events: Vec<EventRow>,
}

impl FixtureStore {
    /// ## Summary
    /// Builds a store from organization and event rows.
    ///
    /// ## Errors
    /// Returns an error if two organizations share an id.
    pub fn new(organizations: Vec<OrganizationRow>, events: Vec<EventRow>) -> Result<Self, FixtureError> {
        let mut map = OrganizationMap::with_capacity(organizations.len());
        for row in organizations {
            if map.contains_key(&row.id) {
                return Err(FixtureError::DuplicateOrganization(row.id));
            }
            map.insert(row.id.clone(), row);
        }
        Ok(Self {
            organizations: map,
            events,
        })
    }

    /// ## Summary
    /// Parses a store from a JSON document.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or has duplicate organizations.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let doc: FixtureDocument = serde_json::from_str(json)?;
        Self::new(doc.organizations, doc.events)
    }

    /// ## Summary
    /// Reads and parses a store from a JSON file.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or parsed.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            organizations = store.organizations.len(),
            events = store.events.len(),
            "Fixture store loaded"
        );
        Ok(store)
    }

    fn lookup_entity(&self, kind: EntityType, id: &str) -> DbResult<Option<Entity>> {
        let Some(row) = self
            .organizations
            .get(id)
            .filter(|row| row.kind == kind.as_str())
        else {
            return Ok(None);
        };
        assemble::entity_from_chain(assemble::ancestor_chain(row, &self.organizations))
    }

    fn lookup_events(&self, kind: EntityType, id: &str) -> DbResult<Vec<Event>> {
        let mut rows: Vec<&EventRow> = self
            .events
            .iter()
            .filter(|row| {
                row.visibility == Visibility::Public
                    && row.entity_kind == kind.as_str()
                    && row.entity_id == id
            })
            .collect();
        rows.sort_by(|a, b| a.starts_at.cmp(&b.starts_at).then_with(|| a.id.cmp(&b.id)));

        rows.into_iter()
            .map(|row| assemble::event_from_row(row.clone(), &self.organizations))
            .collect()
    }
}

impl Directory for FixtureStore {
    fn entity<'a>(&'a self, kind: EntityType, id: &'a str) -> BoxFuture<'a, DbResult<Option<Entity>>> {
        Box::pin(async move { self.lookup_entity(kind, id) })
    }
}

impl EventStore for FixtureStore {
    fn public_events<'a>(&'a self, kind: EntityType, id: &'a str) -> BoxFuture<'a, DbResult<Vec<Event>>> {
        Box::pin(async move { self.lookup_events(kind, id) })
    }
}
