//! The persistence contract the entity services run against.
//!
//! Every update is a conditional write: it touches the record only if the
//! given visibility admits it, and reports `None` when nothing matched.
//! Stores assign ids on insert and never delete rows.

use async_trait::async_trait;

use shift_core::entities::{NewSchedule, NewTask, Schedule, Task};
use shift_core::lifecycle::Visibility;
use shift_core::updates::{ScheduleUpdate, TaskUpdate};

use crate::ShiftDb;
use crate::error::DatabaseError;

/// Filter for schedule listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub visibility: Visibility,
}

/// Filter for task listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub schedule_id: Option<String>,
    pub visibility: Visibility,
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn get_schedule(
        &self,
        id: &str,
        visibility: Visibility,
    ) -> Result<Option<Schedule>, DatabaseError>;

    async fn list_schedules(&self, filter: &ScheduleFilter)
    -> Result<Vec<Schedule>, DatabaseError>;

    async fn insert_schedule(&self, draft: NewSchedule) -> Result<Schedule, DatabaseError>;

    async fn update_schedule_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &ScheduleUpdate,
    ) -> Result<Option<Schedule>, DatabaseError>;

    async fn get_task(&self, id: &str, visibility: Visibility)
    -> Result<Option<Task>, DatabaseError>;

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError>;

    async fn insert_task(&self, draft: NewTask) -> Result<Task, DatabaseError>;

    async fn update_task_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &TaskUpdate,
    ) -> Result<Option<Task>, DatabaseError>;
}

#[async_trait]
impl Store for ShiftDb {
    async fn get_schedule(
        &self,
        id: &str,
        visibility: Visibility,
    ) -> Result<Option<Schedule>, DatabaseError> {
        Self::get_schedule(self, id, visibility).await
    }

    async fn list_schedules(
        &self,
        filter: &ScheduleFilter,
    ) -> Result<Vec<Schedule>, DatabaseError> {
        Self::list_schedules(self, filter).await
    }

    async fn insert_schedule(&self, draft: NewSchedule) -> Result<Schedule, DatabaseError> {
        Self::insert_schedule(self, draft).await
    }

    async fn update_schedule_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &ScheduleUpdate,
    ) -> Result<Option<Schedule>, DatabaseError> {
        Self::update_schedule_fields(self, id, visibility, patch).await
    }

    async fn get_task(
        &self,
        id: &str,
        visibility: Visibility,
    ) -> Result<Option<Task>, DatabaseError> {
        Self::get_task(self, id, visibility).await
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        Self::list_tasks(self, filter).await
    }

    async fn insert_task(&self, draft: NewTask) -> Result<Task, DatabaseError> {
        Self::insert_task(self, draft).await
    }

    async fn update_task_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &TaskUpdate,
    ) -> Result<Option<Task>, DatabaseError> {
        Self::update_task_fields(self, id, visibility, patch).await
    }
}
