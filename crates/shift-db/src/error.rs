//! Database error types for shift-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying `libSQL` error.
    #[error("libSQL error: {0}")]
    LibSql(#[source] Box<libsql::Error>),
}

impl From<libsql::Error> for DatabaseError {
    fn from(error: libsql::Error) -> Self {
        Self::LibSql(Box::new(error))
    }
}
