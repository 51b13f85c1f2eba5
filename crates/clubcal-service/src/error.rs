use clubcal_core::types::EntityType;
use thiserror::Error;

/// Feed pipeline errors.
///
/// Every variant maps to exactly one HTTP status in the app layer.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    #[error("No {kind} with id {id}")]
    EntityNotFound { kind: EntityType, id: String },

    #[error("Upstream fetch failed: {0}")]
    UpstreamFetchError(#[from] clubcal_db::error::DbError),

    #[error("Serialization failed: {0}")]
    SerializationError(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
