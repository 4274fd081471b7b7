//! Entity services.
//!
//! `ShiftService` runs each request through the shift-core pipeline (fields,
//! temporal, containment, lifecycle gate) and then issues one store call for
//! the write. Store failures are logged here and surface to callers only as
//! `ShiftError::Unexpected`.

mod schedule;
mod task;

use std::sync::Arc;

use shift_core::clock::{Clock, SystemClock};
use shift_core::errors::ShiftError;

use crate::ShiftDb;
use crate::error::DatabaseError;
use crate::store::Store;

/// Schedule and task operations over an injected store and clock.
#[derive(Clone)]
pub struct ShiftService {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl ShiftService {
    #[must_use]
    pub const fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Open a `libSQL` database at `db_path` (or `":memory:"`) on the wall clock.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ShiftDb::open_local(db_path).await?;
        Ok(Self::new(Arc::new(db), Arc::new(SystemClock)))
    }
}

/// Collapse a store failure into the opaque caller-facing error.
#[allow(clippy::needless_pass_by_value)]
fn opaque(error: DatabaseError) -> ShiftError {
    tracing::error!(%error, "store operation failed");
    ShiftError::Unexpected
}

/// Log a rejected request at `warn` and lift it into `ShiftError`.
fn rejected(error: impl Into<ShiftError>) -> ShiftError {
    let error = error.into();
    tracing::warn!(status = error.status_code(), %error, "request rejected");
    error
}
