//! Schedule operations.

use serde_json::Value;
use tracing::{debug, info};

use shift_core::entities::Schedule;
use shift_core::errors::ShiftError;
use shift_core::lifecycle::{Visibility, require_active, require_deactivated};
use shift_core::updates::ScheduleUpdateBuilder;
use shift_core::validate::{fields, temporal};

use super::{ShiftService, opaque, rejected};
use crate::store::ScheduleFilter;

impl ShiftService {
    /// Validate `body` and store a new active schedule.
    ///
    /// # Errors
    ///
    /// Validation and temporal errors (400), `Unexpected` on store failure.
    pub async fn create_schedule(&self, body: &Value) -> Result<Schedule, ShiftError> {
        debug!("create_schedule");
        let draft = fields::schedule_create(body).map_err(rejected)?;
        temporal::schedule_create(&draft, self.clock.now()).map_err(rejected)?;

        let schedule = self.store.insert_schedule(draft).await.map_err(opaque)?;
        info!(id = %schedule.id, "schedule created");
        Ok(schedule)
    }

    /// All active schedules, in creation order.
    ///
    /// # Errors
    ///
    /// `Unexpected` on store failure.
    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, ShiftError> {
        debug!("list_schedules");
        self.store
            .list_schedules(&ScheduleFilter::default())
            .await
            .map_err(opaque)
    }

    /// # Errors
    ///
    /// `NotFound` if the schedule is absent or inactive.
    pub async fn get_schedule(&self, id: &str) -> Result<Schedule, ShiftError> {
        debug!(id, "get_schedule");
        let found = self
            .store
            .get_schedule(id, Visibility::ActiveOnly)
            .await
            .map_err(opaque)?;
        require_active(found, id)
    }

    /// Apply a partial update to an active schedule.
    ///
    /// A window change must send both `start_time` and `end_time`.
    ///
    /// # Errors
    ///
    /// Validation and temporal errors (400), `NotFound` if the schedule is
    /// absent or inactive.
    pub async fn update_schedule(&self, id: &str, body: &Value) -> Result<Schedule, ShiftError> {
        debug!(id, "update_schedule");
        let patch = fields::schedule_update(body).map_err(rejected)?;
        temporal::schedule_update(&patch, self.clock.now()).map_err(rejected)?;

        let updated = self
            .store
            .update_schedule_fields(id, Visibility::ActiveOnly, &patch)
            .await
            .map_err(opaque)?;
        let schedule = require_active(updated, id)?;
        info!(id, "schedule updated");
        Ok(schedule)
    }

    /// Soft-delete an active schedule. Its tasks are left as they are.
    ///
    /// # Errors
    ///
    /// `NotFound` if the schedule is absent or already inactive.
    pub async fn remove_schedule(&self, id: &str) -> Result<Schedule, ShiftError> {
        debug!(id, "remove_schedule");
        let patch = ScheduleUpdateBuilder::new().deactivate().build();
        let removed = self
            .store
            .update_schedule_fields(id, Visibility::ActiveOnly, &patch)
            .await
            .map_err(opaque)?;
        let schedule = require_deactivated(removed, id)?;
        info!(id, "schedule removed");
        Ok(schedule)
    }
}
