//! In-process store.
//!
//! Holds records in insertion order behind a single lock, so each operation
//! (including a conditional write) is atomic. Ids are sequential:
//! `sch-00000001`, `tsk-00000001`, ...

use async_trait::async_trait;
use tokio::sync::Mutex;

use shift_core::entities::{NewSchedule, NewTask, Schedule, Task};
use shift_core::ids::{PREFIX_SCHEDULE, PREFIX_TASK, format_id};
use shift_core::lifecycle::{Lifecycle, Visibility};
use shift_core::updates::{ScheduleUpdate, TaskUpdate};

use crate::error::DatabaseError;
use crate::store::{ScheduleFilter, Store, TaskFilter};

#[derive(Debug, Default)]
struct State {
    schedules: Vec<Schedule>,
    tasks: Vec<Task>,
    next_schedule: u32,
    next_task: u32,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(counter: &mut u32, prefix: &str) -> Result<String, DatabaseError> {
    *counter = counter
        .checked_add(1)
        .ok_or_else(|| DatabaseError::Query(format!("{prefix} id space exhausted")))?;
    Ok(format_id(prefix, *counter))
}

fn find<T: Lifecycle + Clone>(
    records: &[T],
    matches: impl Fn(&T) -> bool,
    visibility: Visibility,
) -> Option<T> {
    records
        .iter()
        .find(|record| matches(record) && visibility.admits(record.is_active()))
        .cloned()
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_schedule(
        &self,
        id: &str,
        visibility: Visibility,
    ) -> Result<Option<Schedule>, DatabaseError> {
        Ok(find(&self.state.lock().await.schedules, |s| s.id == id, visibility))
    }

    async fn list_schedules(
        &self,
        filter: &ScheduleFilter,
    ) -> Result<Vec<Schedule>, DatabaseError> {
        Ok(self
            .state
            .lock()
            .await
            .schedules
            .iter()
            .filter(|s| filter.visibility.admits(s.active))
            .cloned()
            .collect())
    }

    async fn insert_schedule(&self, draft: NewSchedule) -> Result<Schedule, DatabaseError> {
        let mut state = self.state.lock().await;
        let id = next_id(&mut state.next_schedule, PREFIX_SCHEDULE)?;
        let schedule = draft.into_schedule(id);
        state.schedules.push(schedule.clone());
        drop(state);
        Ok(schedule)
    }

    async fn update_schedule_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &ScheduleUpdate,
    ) -> Result<Option<Schedule>, DatabaseError> {
        let mut state = self.state.lock().await;
        let updated = state
            .schedules
            .iter_mut()
            .find(|s| s.id == id && visibility.admits(s.active))
            .map(|schedule| {
                patch.apply_to(schedule);
                schedule.clone()
            });
        drop(state);
        Ok(updated)
    }

    async fn get_task(
        &self,
        id: &str,
        visibility: Visibility,
    ) -> Result<Option<Task>, DatabaseError> {
        Ok(find(&self.state.lock().await.tasks, |t| t.id == id, visibility))
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        Ok(self
            .state
            .lock()
            .await
            .tasks
            .iter()
            .filter(|t| filter.visibility.admits(t.active))
            .filter(|t| {
                filter
                    .schedule_id
                    .as_deref()
                    .is_none_or(|schedule_id| t.schedule_id == schedule_id)
            })
            .cloned()
            .collect())
    }

    async fn insert_task(&self, draft: NewTask) -> Result<Task, DatabaseError> {
        let mut state = self.state.lock().await;
        if !state.schedules.iter().any(|s| s.id == draft.schedule_id) {
            return Err(DatabaseError::Query(format!(
                "task references unknown schedule {}",
                draft.schedule_id
            )));
        }
        let id = next_id(&mut state.next_task, PREFIX_TASK)?;
        let task = draft.into_task(id);
        state.tasks.push(task.clone());
        drop(state);
        Ok(task)
    }

    async fn update_task_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &TaskUpdate,
    ) -> Result<Option<Task>, DatabaseError> {
        let mut state = self.state.lock().await;
        let updated = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id && visibility.admits(t.active))
            .map(|task| {
                patch.apply_to(task);
                task.clone()
            });
        drop(state);
        Ok(updated)
    }
}
