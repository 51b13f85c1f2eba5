//! `PostgreSQL`-backed collaborators.

use std::sync::Arc;

use clubcal_core::types::EntityType;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use futures::future::BoxFuture;

use crate::db::DbProvider;
use crate::db::query::{event, organization};
use crate::error::DbResult;
use crate::model::assemble::{self, OrganizationMap};
use crate::model::{Entity, Event};
use crate::store::{Directory, EventStore};

/// Directory and event store reading from `PostgreSQL`.
#[derive(Clone)]
pub struct PgStore {
    provider: Arc<dyn DbProvider>,
}

impl PgStore {
    #[must_use]
    pub fn new(provider: Arc<dyn DbProvider>) -> Self {
        Self { provider }
    }

    async fn lookup_entity(&self, kind: EntityType, id: &str) -> DbResult<Option<Entity>> {
        let mut conn = self.provider.get_connection().await?;

        let Some(row) = organization::by_kind_and_id(kind, id)
            .first(&mut conn)
            .await
            .optional()?
        else {
            return Ok(None);
        };

        let mut chain = vec![row];
        while let Some(pid) = assemble::next_parent_id(&chain).map(str::to_string) {
            let Some(parent) = organization::by_id(&pid)
                .first(&mut conn)
                .await
                .optional()?
            else {
                tracing::warn!(organization = %id, parent = %pid, "Parent organization missing");
                break;
            };
            chain.push(parent);
        }

        assemble::entity_from_chain(chain)
    }

    async fn lookup_events(&self, kind: EntityType, id: &str) -> DbResult<Vec<Event>> {
        let mut conn = self.provider.get_connection().await?;

        let rows = event::public_for_entity(kind, id).load(&mut conn).await?;

        let mut tag_ids: Vec<String> = rows
            .iter()
            .flat_map(|r| r.tag_ids())
            .map(str::to_string)
            .collect();
        tag_ids.sort_unstable();
        tag_ids.dedup();

        let organizations: OrganizationMap = if tag_ids.is_empty() {
            OrganizationMap::new()
        } else {
            organization::by_ids(tag_ids)
                .load(&mut conn)
                .await?
                .into_iter()
                .map(|row| (row.id.clone(), row))
                .collect()
        };

        rows.into_iter()
            .map(|row| assemble::event_from_row(row, &organizations))
            .collect()
    }
}

impl Directory for PgStore {
    #[tracing::instrument(skip(self))]
    fn entity<'a>(&'a self, kind: EntityType, id: &'a str) -> BoxFuture<'a, DbResult<Option<Entity>>> {
        Box::pin(self.lookup_entity(kind, id))
    }
}

impl EventStore for PgStore {
    #[tracing::instrument(skip(self))]
    fn public_events<'a>(&'a self, kind: EntityType, id: &'a str) -> BoxFuture<'a, DbResult<Vec<Event>>> {
        Box::pin(self.lookup_events(kind, id))
    }
}
