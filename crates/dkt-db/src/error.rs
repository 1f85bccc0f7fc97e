//! Storage error types for dkt-db.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A SQL query failed.
    #[error("query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("migration failed: {0}")]
    Migration(String),

    /// No owned record matches the requested id or title.
    #[error("task not found")]
    NotFound,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
