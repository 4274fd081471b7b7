//! # shift-db
//!
//! Persistence and entity services for Shiftline.
//!
//! - [`ShiftDb`]: a `libSQL` database holding schedules and tasks
//! - [`store::Store`]: the persistence contract the services depend on,
//!   implemented by `ShiftDb` and by the in-process [`memory::MemoryStore`]
//! - [`service::ShiftService`]: create/list/get/update/remove for both
//!   entities, running the shift-core validation pipeline before each write

pub mod error;
pub mod helpers;
pub mod memory;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for schedule and task state.
///
/// Wraps a `libSQL` database and connection. Repository methods live in
/// [`repos`] as `impl ShiftDb` blocks.
pub struct ShiftDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ShiftDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let shift_db = Self { db, conn };
        shift_db.run_migrations().await?;
        Ok(shift_db)
    }

    /// Access the underlying `libSQL` connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via `libSQL`. Returns e.g. `"sch-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
