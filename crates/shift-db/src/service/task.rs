//! Task operations.
//!
//! Tasks are checked against their parent schedule on every write. Reads
//! embed the parent schedule whatever its active flag, so a task whose
//! schedule was removed still shows where it belongs.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, error, info};

use shift_core::entities::{Schedule, Task, TaskWithSchedule};
use shift_core::errors::ShiftError;
use shift_core::lifecycle::{Visibility, require_active, require_deactivated};
use shift_core::updates::TaskUpdateBuilder;
use shift_core::validate::containment::{self, TaskSpan};
use shift_core::validate::{fields, temporal};

use super::{ShiftService, opaque, rejected};
use crate::store::TaskFilter;

impl ShiftService {
    /// Validate `body`, check it against its active parent schedule, and
    /// store a new active task.
    ///
    /// # Errors
    ///
    /// Validation, temporal and containment errors (400), `NotFound` if the
    /// schedule is absent or inactive.
    pub async fn create_task(&self, body: &Value) -> Result<Task, ShiftError> {
        debug!("create_task");
        let draft = fields::task_create(body).map_err(rejected)?;
        temporal::task_create(&draft, self.clock.now()).map_err(rejected)?;

        let schedule = self.active_schedule(&draft.schedule_id).await?;
        containment::check(TaskSpan::of_new(&draft), &schedule).map_err(rejected)?;

        let task = self.store.insert_task(draft).await.map_err(opaque)?;
        info!(id = %task.id, schedule_id = %task.schedule_id, "task created");
        Ok(task)
    }

    /// Active tasks in creation order, each with its schedule embedded.
    ///
    /// # Errors
    ///
    /// `Unexpected` on store failure or a dangling schedule reference.
    pub async fn list_tasks(
        &self,
        schedule_id: Option<&str>,
    ) -> Result<Vec<TaskWithSchedule>, ShiftError> {
        debug!(?schedule_id, "list_tasks");
        let filter = TaskFilter {
            schedule_id: schedule_id.map(str::to_string),
            visibility: Visibility::ActiveOnly,
        };
        let tasks = self.store.list_tasks(&filter).await.map_err(opaque)?;

        let mut schedules: HashMap<String, Schedule> = HashMap::new();
        let mut views = Vec::with_capacity(tasks.len());
        for task in tasks {
            let schedule = match schedules.get(&task.schedule_id) {
                Some(schedule) => schedule.clone(),
                None => {
                    let schedule = self.parent_schedule(&task).await?;
                    schedules.insert(task.schedule_id.clone(), schedule.clone());
                    schedule
                }
            };
            views.push(TaskWithSchedule { task, schedule });
        }
        Ok(views)
    }

    /// # Errors
    ///
    /// `NotFound` if the task is absent or inactive.
    pub async fn get_task(&self, id: &str) -> Result<TaskWithSchedule, ShiftError> {
        debug!(id, "get_task");
        let found = self
            .store
            .get_task(id, Visibility::ActiveOnly)
            .await
            .map_err(opaque)?;
        let task = require_active(found, id)?;
        let schedule = self.parent_schedule(&task).await?;
        Ok(TaskWithSchedule { task, schedule })
    }

    /// Apply a partial update to an active task.
    ///
    /// The resulting span is always re-checked against the (possibly new)
    /// parent schedule, with missing fields taken from the stored task.
    ///
    /// # Errors
    ///
    /// Validation, temporal and containment errors (400), `NotFound` if the
    /// task or its target schedule is absent or inactive.
    pub async fn update_task(&self, id: &str, body: &Value) -> Result<Task, ShiftError> {
        debug!(id, "update_task");
        let patch = fields::task_update(body).map_err(rejected)?;
        temporal::task_update(&patch, self.clock.now()).map_err(rejected)?;

        let found = self
            .store
            .get_task(id, Visibility::ActiveOnly)
            .await
            .map_err(opaque)?;
        let current = require_active(found, id)?;

        let schedule = self
            .active_schedule(containment::resolve_schedule_id(&patch, &current))
            .await?;
        containment::check(containment::effective_span(&patch, &current), &schedule)
            .map_err(rejected)?;

        let updated = self
            .store
            .update_task_fields(id, Visibility::ActiveOnly, &patch)
            .await
            .map_err(opaque)?;
        let task = require_active(updated, id)?;
        info!(id, "task updated");
        Ok(task)
    }

    /// Soft-delete an active task.
    ///
    /// # Errors
    ///
    /// `NotFound` if the task is absent or already inactive.
    pub async fn remove_task(&self, id: &str) -> Result<Task, ShiftError> {
        debug!(id, "remove_task");
        let patch = TaskUpdateBuilder::new().deactivate().build();
        let removed = self
            .store
            .update_task_fields(id, Visibility::ActiveOnly, &patch)
            .await
            .map_err(opaque)?;
        let task = require_deactivated(removed, id)?;
        info!(id, "task removed");
        Ok(task)
    }

    /// Parent lookup through the lifecycle gate, for writes.
    async fn active_schedule(&self, schedule_id: &str) -> Result<Schedule, ShiftError> {
        let found = self
            .store
            .get_schedule(schedule_id, Visibility::ActiveOnly)
            .await
            .map_err(opaque)?;
        require_active(found, schedule_id).map_err(rejected)
    }

    /// Parent lookup for reads. A task always has a stored schedule row.
    async fn parent_schedule(&self, task: &Task) -> Result<Schedule, ShiftError> {
        let found = self
            .store
            .get_schedule(&task.schedule_id, Visibility::Any)
            .await
            .map_err(opaque)?;
        found.ok_or_else(|| {
            error!(task_id = %task.id, schedule_id = %task.schedule_id, "task references a missing schedule");
            ShiftError::Unexpected
        })
    }
}
