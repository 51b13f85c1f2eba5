//! Entity resolution.

use std::str::FromStr;

use clubcal_core::types::EntityType;
use clubcal_db::model::Entity;
use clubcal_db::store::Directory;

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Validates a raw entity type against the known vocabulary.
///
/// ## Errors
/// Returns `InvalidEntityType` for anything other than `club`, `zone`,
/// `district` or `national`.
pub fn parse_entity_type(raw: &str) -> ServiceResult<EntityType> {
    EntityType::from_str(raw).map_err(|_err| ServiceError::InvalidEntityType(raw.to_string()))
}

/// ## Summary
/// Fetches an entity and its ancestor chain from the directory.
///
/// ## Errors
/// Returns `EntityNotFound` if the directory has no such entity, or
/// `UpstreamFetchError` if the directory cannot be queried.
pub async fn resolve_entity<D>(directory: &D, kind: EntityType, id: &str) -> ServiceResult<Entity>
where
    D: Directory + ?Sized,
{
    let entity = directory.entity(kind, id).await?;
    tracing::debug!(entity_type = %kind, entity_id = %id, found = entity.is_some(), "Entity lookup");
    entity.ok_or_else(|| ServiceError::EntityNotFound {
        kind,
        id: id.to_string(),
    })
}
