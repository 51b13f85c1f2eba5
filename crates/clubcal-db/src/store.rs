//! Collaborator interfaces consumed by the feed pipeline.

use clubcal_core::types::EntityType;
use futures::future::BoxFuture;

use crate::error::DbResult;
use crate::model::{Entity, Event};

/// Read access to the organizational directory.
pub trait Directory: Send + Sync {
    /// ## Summary
    /// Looks up an entity of the given type by id, with its ancestor chain populated.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be queried.
    fn entity<'a>(&'a self, kind: EntityType, id: &'a str) -> BoxFuture<'a, DbResult<Option<Entity>>>;
}

/// Read access to published events.
pub trait EventStore: Send + Sync {
    /// ## Summary
    /// Lists the public events directly associated with an entity, ordered
    /// by start time then id.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be queried.
    fn public_events<'a>(&'a self, kind: EntityType, id: &'a str) -> BoxFuture<'a, DbResult<Vec<Event>>>;
}

/// A datastore serving both collaborators.
pub trait Datastore: Directory + EventStore {}

impl<T: Directory + EventStore> Datastore for T {}
