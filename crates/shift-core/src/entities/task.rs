use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::Schedule;
use crate::enums::TaskKind;

/// A timed activity nested inside exactly one schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub account_id: i64,
    pub schedule_id: String,
    pub start_time: DateTime<Utc>,
    /// Length of the task in minutes.
    pub duration: i64,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    #[serde(rename = "is_active")]
    pub active: bool,
}

impl Task {
    /// `start_time + duration` minutes, or `None` if that overflows.
    #[must_use]
    pub fn effective_end(&self) -> Option<DateTime<Utc>> {
        end_after(self.start_time, self.duration)
    }
}

/// A task that passed field validation and is ready to insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    pub account_id: i64,
    pub schedule_id: String,
    pub start_time: DateTime<Utc>,
    pub duration: i64,
    #[serde(rename = "type")]
    pub kind: TaskKind,
}

impl NewTask {
    /// Materialize the stored record. New records are always active.
    #[must_use]
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            account_id: self.account_id,
            schedule_id: self.schedule_id,
            start_time: self.start_time,
            duration: self.duration,
            kind: self.kind,
            active: true,
        }
    }
}

/// Read model for task lookups: the task plus its parent schedule.
///
/// The parent is embedded whatever its active flag; a task whose schedule was
/// removed afterwards still shows the (inactive) schedule it points at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskWithSchedule {
    #[serde(flatten)]
    pub task: Task,
    pub schedule: Schedule,
}

pub fn end_after(start: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_minutes(minutes).and_then(|delta| start.checked_add_signed(delta))
}
