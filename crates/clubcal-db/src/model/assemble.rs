//! Conversion from stored rows to the feed data model.

use std::collections::HashMap;
use std::str::FromStr;

use clubcal_core::types::EntityType;

use super::row::{EventRow, OrganizationRow};
use super::{Entity, EntityRef, Event, EventTags};
use crate::error::{DbError, DbResult};

/// Maximum number of ancestors followed above an entity.
pub const MAX_ANCESTOR_DEPTH: usize = 4;

pub type OrganizationMap = HashMap<String, OrganizationRow>;

fn kind_of(value: &str) -> DbResult<EntityType> {
    Ok(EntityType::from_str(value)?)
}

/// ## Summary
/// Builds an entity from its row followed by its ancestors, nearest first.
///
/// ## Errors
/// Returns an error if a row carries an unknown entity kind.
pub fn entity_from_chain(chain: Vec<OrganizationRow>) -> DbResult<Option<Entity>> {
    chain.into_iter().rev().try_fold(None, |ancestor, row| -> DbResult<Option<Entity>> {
        Ok(Some(Entity {
            kind: kind_of(&row.kind)?,
            id: row.id,
            name: row.name,
            province: row.province,
            ancestor: ancestor.map(Box::new),
        }))
    })
}

/// ## Summary
/// Returns the id of the parent to append to `chain`, a row followed by its
/// ancestors collected so far, nearest first.
///
/// `None` once the last row has no parent, the chain already holds
/// [`MAX_ANCESTOR_DEPTH`] ancestors, or the parent is already in the chain.
#[must_use]
pub fn next_parent_id(chain: &[OrganizationRow]) -> Option<&str> {
    let parent_id = chain.last()?.parent_id.as_deref()?;
    if chain.len() > MAX_ANCESTOR_DEPTH || chain.iter().any(|r| r.id == parent_id) {
        tracing::warn!(
            organization = chain.first().map_or("", |r| r.id.as_str()),
            parent = %parent_id,
            "Ancestor chain truncated"
        );
        return None;
    }
    Some(parent_id)
}

/// ## Summary
/// Collects `row` and its ancestor rows from an in-memory map, nearest first.
///
/// The walk stops at a missing parent or wherever [`next_parent_id`] stops.
#[must_use]
pub fn ancestor_chain(row: &OrganizationRow, organizations: &OrganizationMap) -> Vec<OrganizationRow> {
    let mut chain = vec![row.clone()];

    while let Some(id) = next_parent_id(&chain) {
        let Some(parent) = organizations.get(id) else {
            tracing::warn!(organization = %row.id, parent = %id, "Parent organization missing");
            break;
        };
        chain.push(parent.clone());
    }

    chain
}

fn tag(id: Option<&str>, record: &str, organizations: &OrganizationMap) -> DbResult<Option<EntityRef>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let row = organizations.get(id).ok_or_else(|| DbError::DanglingReference {
        record: record.to_string(),
        id: id.to_string(),
    })?;
    Ok(Some(EntityRef {
        kind: kind_of(&row.kind)?,
        id: row.id.clone(),
        name: row.name.clone(),
        province: row.province.clone(),
    }))
}

/// ## Summary
/// Builds an event from its row, resolving tag associations through `organizations`.
///
/// ## Errors
/// Returns an error if the row carries an unknown entity kind or a tag
/// references an organization missing from `organizations`.
pub fn event_from_row(row: EventRow, organizations: &OrganizationMap) -> DbResult<Event> {
    let tags = EventTags {
        club: tag(row.club_id.as_deref(), &row.id, organizations)?,
        zone: tag(row.zone_id.as_deref(), &row.id, organizations)?,
        district: tag(row.district_id.as_deref(), &row.id, organizations)?,
    };

    Ok(Event {
        entity_kind: kind_of(&row.entity_kind)?,
        id: row.id,
        title: row.title,
        description: row.description,
        starts_at: row.starts_at,
        ends_at: row.ends_at,
        location: row.location,
        url: row.url,
        visibility: row.visibility,
        entity_id: row.entity_id,
        tags,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
