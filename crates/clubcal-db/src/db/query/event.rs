//! Query functions for events.

use clubcal_core::types::EntityType;
use diesel::dsl::AsSelect;
use diesel::pg::Pg;
use diesel::prelude::*;

use crate::db::enums::Visibility;
use crate::db::schema::event;
use crate::model::row::EventRow;

type BoxedQuery<'a, T> = event::BoxedQuery<'a, Pg, AsSelect<T, Pg>>;

/// ## Summary
/// Returns a query to select all events.
#[must_use]
pub fn all<'a>() -> BoxedQuery<'a, EventRow> {
    event::table.select(EventRow::as_select()).into_boxed()
}

/// ## Summary
/// Returns a query for the public events directly associated with an
/// entity, ordered by start time then id.
///
/// Events of descendant entities are not included.
#[must_use]
pub fn public_for_entity(kind: EntityType, id: &str) -> BoxedQuery<'_, EventRow> {
    all()
        .filter(event::entity_kind.eq(kind.as_str()))
        .filter(event::entity_id.eq(id))
        .filter(event::visibility.eq(Visibility::Public))
        .order((event::starts_at.asc(), event::id.asc()))
}
