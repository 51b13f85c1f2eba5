use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error("Fixture error: {0}")]
    FixtureError(#[from] FixtureError),

    #[error("Record {record} references unknown organization {id}")]
    DanglingReference { record: String, id: String },

    #[error(transparent)]
    CoreError(#[from] clubcal_core::error::CoreError),
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed fixture document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate organization id: {0}")]
    DuplicateOrganization(String),
}

pub type DbResult<T> = std::result::Result<T, DbError>;
