//! Time-ordering rules on a record's own fields.
//!
//! "Now" is always passed in by the caller, sampled from its clock at
//! validation time. Future means strictly later than `now`.

use chrono::{DateTime, Utc};

use crate::entities::{NewSchedule, NewTask};
use crate::errors::TemporalError;
use crate::updates::{ScheduleUpdate, TaskUpdate};

/// # Errors
///
/// Returns [`TemporalError`] if either bound is not in the future or the
/// window is empty.
pub fn schedule_create(draft: &NewSchedule, now: DateTime<Utc>) -> Result<(), TemporalError> {
    window(draft.start_time, draft.end_time, now)
}

/// A window update must carry both bounds or neither.
///
/// # Errors
///
/// Returns [`TemporalError::PartialWindow`] if exactly one bound is present,
/// otherwise the same errors as [`schedule_create`].
pub fn schedule_update(patch: &ScheduleUpdate, now: DateTime<Utc>) -> Result<(), TemporalError> {
    match (patch.start_time, patch.end_time) {
        (None, None) => Ok(()),
        (Some(start), Some(end)) => window(start, end, now),
        _ => Err(TemporalError::PartialWindow),
    }
}

/// # Errors
///
/// Returns [`TemporalError::TaskStartNotInFuture`] if the task starts at or
/// before `now`.
pub fn task_create(draft: &NewTask, now: DateTime<Utc>) -> Result<(), TemporalError> {
    task_start(draft.start_time, now)
}

/// Duration is never compared with `now`.
///
/// # Errors
///
/// Returns [`TemporalError::TaskStartNotInFuture`] if a new start time is
/// present and not in the future.
pub fn task_update(patch: &TaskUpdate, now: DateTime<Utc>) -> Result<(), TemporalError> {
    patch
        .start_time
        .map_or(Ok(()), |start| task_start(start, now))
}

fn window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), TemporalError> {
    if start <= now || end <= now {
        return Err(TemporalError::WindowNotInFuture);
    }
    if start >= end {
        return Err(TemporalError::EndNotAfterStart);
    }
    Ok(())
}

fn task_start(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), TemporalError> {
    if start <= now {
        return Err(TemporalError::TaskStartNotInFuture);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TaskKind;
    use crate::updates::{ScheduleUpdateBuilder, TaskUpdateBuilder};
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
    }

    fn hours(n: i64) -> DateTime<Utc> {
        now() + TimeDelta::hours(n)
    }

    fn draft(start: DateTime<Utc>, end: DateTime<Utc>) -> NewSchedule {
        NewSchedule {
            account_id: 1,
            agent_id: 2,
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn future_window_passes() {
        assert_eq!(schedule_create(&draft(hours(1), hours(2)), now()), Ok(()));
    }

    #[test]
    fn past_start_is_rejected_before_ordering() {
        assert_eq!(
            schedule_create(&draft(hours(-1), hours(-2)), now()),
            Err(TemporalError::WindowNotInFuture)
        );
    }

    #[test]
    fn start_exactly_now_is_not_future() {
        assert_eq!(
            schedule_create(&draft(now(), hours(2)), now()),
            Err(TemporalError::WindowNotInFuture)
        );
    }

    #[test]
    fn empty_or_inverted_window_is_rejected() {
        assert_eq!(
            schedule_create(&draft(hours(2), hours(2)), now()),
            Err(TemporalError::EndNotAfterStart)
        );
        assert_eq!(
            schedule_create(&draft(hours(3), hours(2)), now()),
            Err(TemporalError::EndNotAfterStart)
        );
    }

    #[test]
    fn update_needs_both_bounds_or_neither() {
        let none = ScheduleUpdateBuilder::new().agent_id(5).build();
        assert_eq!(schedule_update(&none, now()), Ok(()));

        let start_only = ScheduleUpdateBuilder::new().start_time(hours(1)).build();
        assert_eq!(
            schedule_update(&start_only, now()),
            Err(TemporalError::PartialWindow)
        );

        let end_only = ScheduleUpdateBuilder::new().end_time(hours(1)).build();
        assert_eq!(
            schedule_update(&end_only, now()),
            Err(TemporalError::PartialWindow)
        );

        let both = ScheduleUpdateBuilder::new()
            .start_time(hours(2))
            .end_time(hours(1))
            .build();
        assert_eq!(
            schedule_update(&both, now()),
            Err(TemporalError::EndNotAfterStart)
        );
    }

    #[test]
    fn task_start_must_be_future() {
        let task = NewTask {
            account_id: 1,
            schedule_id: "sch-00000001".into(),
            start_time: now(),
            duration: 30,
            kind: TaskKind::Work,
        };
        assert_eq!(
            task_create(&task, now()),
            Err(TemporalError::TaskStartNotInFuture)
        );
    }

    #[test]
    fn task_update_without_start_ignores_now() {
        let patch = TaskUpdateBuilder::new().duration(600).build();
        assert_eq!(task_update(&patch, now()), Ok(()));

        let past = TaskUpdateBuilder::new().start_time(hours(-1)).build();
        assert_eq!(
            task_update(&past, now()),
            Err(TemporalError::TaskStartNotInFuture)
        );
    }
}
