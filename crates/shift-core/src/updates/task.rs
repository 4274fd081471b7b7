//! Task update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::Task;
use crate::enums::TaskKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaskKind>,
    #[serde(rename = "is_active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl TaskUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.account_id.is_none()
            && self.schedule_id.is_none()
            && self.start_time.is_none()
            && self.duration.is_none()
            && self.kind.is_none()
            && self.active.is_none()
    }

    /// Write every `Some` field onto `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(account_id) = self.account_id {
            task.account_id = account_id;
        }
        if let Some(ref schedule_id) = self.schedule_id {
            task.schedule_id.clone_from(schedule_id);
        }
        if let Some(start_time) = self.start_time {
            task.start_time = start_time;
        }
        if let Some(duration) = self.duration {
            task.duration = duration;
        }
        if let Some(kind) = self.kind {
            task.kind = kind;
        }
        if let Some(active) = self.active {
            task.active = active;
        }
    }
}

pub struct TaskUpdateBuilder(TaskUpdate);

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub const fn account_id(mut self, account_id: i64) -> Self {
        self.0.account_id = Some(account_id);
        self
    }

    #[must_use]
    pub fn schedule_id(mut self, schedule_id: impl Into<String>) -> Self {
        self.0.schedule_id = Some(schedule_id.into());
        self
    }

    #[must_use]
    pub const fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.0.start_time = Some(start_time);
        self
    }

    #[must_use]
    pub const fn duration(mut self, duration: i64) -> Self {
        self.0.duration = Some(duration);
        self
    }

    #[must_use]
    pub const fn kind(mut self, kind: TaskKind) -> Self {
        self.0.kind = Some(kind);
        self
    }

    /// Clear the active flag (soft delete).
    #[must_use]
    pub const fn deactivate(mut self) -> Self {
        self.0.active = Some(false);
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}

impl Default for TaskUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
