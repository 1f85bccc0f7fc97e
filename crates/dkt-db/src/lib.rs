//! # dkt-db
//!
//! libSQL persistence for Docket task records.
//!
//! [`DocketDb`] owns the database handle and generates prefixed record ids;
//! the repository methods live on [`service::TaskService`] via `impl` blocks
//! under [`repos`].
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29): embedded local
//! database, no server process to run.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::StoreError;
use libsql::Builder;

/// Database handle for all Docket state operations.
pub struct DocketDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl DocketDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let docket_db = Self { db, conn };
        docket_db.run_migrations().await?;
        Ok(docket_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tsk-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| StoreError::Query("id generation returned no row".into()))?;
        Ok(row.get::<String>(0)?)
    }
}
