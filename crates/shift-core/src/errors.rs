//! Error taxonomy surfaced to Shiftline callers.
//!
//! Each pipeline stage has its own error type; `ShiftError` is the single
//! type the entity services return. Storage errors never reach callers in
//! detail: the service logs them and returns `ShiftError::Unexpected`.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::enums::EntityKind;

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// One or more field violations, collected across the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.messages))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    #[must_use]
    pub const fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// One message per violated field constraint, in schema order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

// ---------------------------------------------------------------------------
// Temporal rules
// ---------------------------------------------------------------------------

/// A schedule window or task start that breaks the time-ordering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemporalError {
    #[error("Start and end dates must be in the future")]
    WindowNotInFuture,

    #[error("End date must be after the start date")]
    EndNotAfterStart,

    /// Only one side of a schedule window was sent in an update.
    #[error("Send both start and end time for update")]
    PartialWindow,

    #[error("Start datetime of task must be in the future")]
    TaskStartNotInFuture,
}

// ---------------------------------------------------------------------------
// Containment
// ---------------------------------------------------------------------------

/// A single way a task span falls outside its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainmentViolation {
    StartsBeforeSchedule {
        task_start: DateTime<Utc>,
        schedule_start: DateTime<Utc>,
    },
    EndsAfterSchedule {
        task_end: DateTime<Utc>,
        schedule_end: DateTime<Utc>,
    },
    /// `start_time + duration` is not representable.
    EndOverflows,
}

impl fmt::Display for ContainmentViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartsBeforeSchedule {
                task_start,
                schedule_start,
            } => write!(
                f,
                "task starts at {} before schedule start {}",
                task_start.to_rfc3339(),
                schedule_start.to_rfc3339()
            ),
            Self::EndsAfterSchedule {
                task_end,
                schedule_end,
            } => write!(
                f,
                "task ends at {} after schedule end {}",
                task_end.to_rfc3339(),
                schedule_end.to_rfc3339()
            ),
            Self::EndOverflows => f.write_str("task end time is out of range"),
        }
    }
}

/// A task span that does not fit inside its parent schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Task time period is out of the schedule's valid period: {}",
    join_violations(.violations)
)]
pub struct ContainmentError {
    violations: Vec<ContainmentViolation>,
}

impl ContainmentError {
    #[must_use]
    pub const fn new(violations: Vec<ContainmentViolation>) -> Self {
        Self { violations }
    }

    #[must_use]
    pub fn violations(&self) -> &[ContainmentViolation] {
        &self.violations
    }
}

fn join_messages(messages: &[String]) -> String {
    messages.join("; ")
}

fn join_violations(violations: &[ContainmentViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ---------------------------------------------------------------------------
// ShiftError
// ---------------------------------------------------------------------------

/// Everything an entity service operation can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Temporal(#[from] TemporalError),

    #[error(transparent)]
    Containment(#[from] ContainmentError),

    /// The entity is absent or inactive.
    #[error("{entity} with ID {id} not found.")]
    NotFound { entity: EntityKind, id: String },

    /// Any other failure. The cause is logged, never returned.
    #[error("Internal server error")]
    Unexpected,
}

impl ShiftError {
    #[must_use]
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// HTTP status class this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Temporal(_) | Self::Containment(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Unexpected => 500,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn validation_messages_join_with_semicolons() {
        let error = ValidationError::new(vec![
            "account_id cannot be empty".into(),
            "duration should be integer".into(),
        ]);
        assert_eq!(
            error.to_string(),
            "account_id cannot be empty; duration should be integer"
        );
    }

    #[test]
    fn containment_message_names_every_violation() {
        let error = ContainmentError::new(vec![
            ContainmentViolation::StartsBeforeSchedule {
                task_start: Utc.with_ymd_and_hms(2099, 5, 1, 8, 0, 0).unwrap(),
                schedule_start: Utc.with_ymd_and_hms(2099, 5, 1, 9, 0, 0).unwrap(),
            },
            ContainmentViolation::EndOverflows,
        ]);
        let message = error.to_string();
        assert!(message.starts_with("Task time period is out of the schedule's valid period: "));
        assert!(message.contains("before schedule start 2099-05-01T09:00:00+00:00"));
        assert!(message.ends_with("; task end time is out of range"));
    }

    #[test]
    fn status_codes_follow_error_class() {
        assert_eq!(
            ShiftError::from(ValidationError::single("x")).status_code(),
            400
        );
        assert_eq!(
            ShiftError::from(TemporalError::PartialWindow).status_code(),
            400
        );
        assert_eq!(
            ShiftError::from(ContainmentError::new(vec![])).status_code(),
            400
        );
        assert_eq!(
            ShiftError::not_found(EntityKind::Task, "tsk-1").status_code(),
            404
        );
        assert_eq!(ShiftError::Unexpected.status_code(), 500);
    }

    #[test]
    fn not_found_message_matches_api() {
        let error = ShiftError::not_found(EntityKind::Schedule, "sch-00000001");
        assert_eq!(error.to_string(), "Schedule with ID sch-00000001 not found.");
        assert!(error.is_not_found());
    }

    #[test]
    fn unexpected_is_opaque() {
        assert_eq!(ShiftError::Unexpected.to_string(), "Internal server error");
    }
}
