//! Task-in-schedule containment.
//!
//! A task occupies `[start_time, start_time + duration minutes]`. That span
//! must sit inside its schedule's `[start_time, end_time]`, bounds included.

use chrono::{DateTime, Utc};

use crate::entities::{NewTask, Schedule, Task, end_after};
use crate::errors::{ContainmentError, ContainmentViolation};
use crate::updates::TaskUpdate;

/// The part of a task that containment looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpan {
    pub start_time: DateTime<Utc>,
    pub duration: i64,
}

impl TaskSpan {
    #[must_use]
    pub const fn of_new(draft: &NewTask) -> Self {
        Self {
            start_time: draft.start_time,
            duration: draft.duration,
        }
    }

    /// `None` when the end is not representable.
    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        end_after(self.start_time, self.duration)
    }
}

/// The span a task would have after `patch`, falling back to stored values.
#[must_use]
pub fn effective_span(patch: &TaskUpdate, current: &Task) -> TaskSpan {
    TaskSpan {
        start_time: patch.start_time.unwrap_or(current.start_time),
        duration: patch.duration.unwrap_or(current.duration),
    }
}

/// The schedule a task would belong to after `patch`.
#[must_use]
pub fn resolve_schedule_id<'a>(patch: &'a TaskUpdate, current: &'a Task) -> &'a str {
    patch.schedule_id.as_deref().unwrap_or(&current.schedule_id)
}

/// Check that `span` lies within `schedule`. Every violation is reported.
///
/// # Errors
///
/// Returns [`ContainmentError`] if the span starts before the schedule,
/// ends after it, or has an unrepresentable end.
pub fn check(span: TaskSpan, schedule: &Schedule) -> Result<(), ContainmentError> {
    let mut violations = Vec::new();
    if span.start_time < schedule.start_time {
        violations.push(ContainmentViolation::StartsBeforeSchedule {
            task_start: span.start_time,
            schedule_start: schedule.start_time,
        });
    }
    match span.end_time() {
        Some(task_end) if task_end > schedule.end_time => {
            violations.push(ContainmentViolation::EndsAfterSchedule {
                task_end,
                schedule_end: schedule.end_time,
            });
        }
        Some(_) => {}
        None => violations.push(ContainmentViolation::EndOverflows),
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ContainmentError::new(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TaskKind;
    use crate::updates::TaskUpdateBuilder;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2099, 5, 1, hour, minute, 0).unwrap()
    }

    fn schedule() -> Schedule {
        Schedule {
            id: "sch-00000001".into(),
            account_id: 100,
            agent_id: 201,
            start_time: at(11, 0),
            end_time: at(23, 0),
            active: true,
        }
    }

    fn task() -> Task {
        Task {
            id: "tsk-00000001".into(),
            account_id: 100,
            schedule_id: "sch-00000001".into(),
            start_time: at(12, 0),
            duration: 60,
            kind: TaskKind::Work,
            active: true,
        }
    }

    fn span(start: DateTime<Utc>, duration: i64) -> TaskSpan {
        TaskSpan {
            start_time: start,
            duration,
        }
    }

    #[test]
    fn span_touching_both_bounds_fits() {
        assert_eq!(check(span(at(11, 0), 720), &schedule()), Ok(()));
    }

    #[test]
    fn early_start_is_reported() {
        let error = check(span(at(10, 0), 30), &schedule()).unwrap_err();
        assert_eq!(
            error.violations(),
            &[ContainmentViolation::StartsBeforeSchedule {
                task_start: at(10, 0),
                schedule_start: at(11, 0),
            }]
        );
    }

    #[test]
    fn both_violations_are_reported_together() {
        let error = check(span(at(10, 0), 24 * 60), &schedule()).unwrap_err();
        assert_eq!(error.violations().len(), 2);
        assert!(matches!(
            error.violations()[1],
            ContainmentViolation::EndsAfterSchedule { .. }
        ));
    }

    #[test]
    fn overflowing_end_is_a_violation() {
        let error = check(span(at(12, 0), i64::MAX), &schedule()).unwrap_err();
        assert_eq!(error.violations(), &[ContainmentViolation::EndOverflows]);
    }

    #[test]
    fn effective_span_falls_back_to_stored_values() {
        let patch = TaskUpdateBuilder::new().duration(90).build();
        assert_eq!(effective_span(&patch, &task()), span(at(12, 0), 90));

        let patch = TaskUpdateBuilder::new().start_time(at(13, 0)).build();
        assert_eq!(effective_span(&patch, &task()), span(at(13, 0), 60));
    }

    #[test]
    fn schedule_id_prefers_the_patch() {
        let current = task();
        let keep = TaskUpdate::default();
        assert_eq!(resolve_schedule_id(&keep, &current), "sch-00000001");

        let moved = TaskUpdateBuilder::new().schedule_id("sch-00000002").build();
        assert_eq!(resolve_schedule_id(&moved, &current), "sch-00000002");
    }
}
