//! Lifecycle gate: what "exists" means from the outside.
//!
//! Records are never erased. Removing one clears its active flag, and an
//! inactive record is indistinguishable from a missing one to every read.
//!
//! ```text
//! active ──update──▶ active
//! active ──remove──▶ inactive   (terminal)
//! ```

use crate::entities::{Schedule, Task};
use crate::enums::EntityKind;
use crate::errors::ShiftError;

/// Which records a lookup or conditional write may match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Only records whose active flag is set.
    #[default]
    ActiveOnly,
    /// Active and inactive records alike.
    Any,
}

impl Visibility {
    #[must_use]
    pub const fn admits(self, active: bool) -> bool {
        match self {
            Self::ActiveOnly => active,
            Self::Any => true,
        }
    }
}

/// Lifecycle state derived from the active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Active,
    Inactive,
}

impl LifecycleState {
    #[must_use]
    pub const fn from_flag(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Active, Self::Inactive],
            Self::Inactive => &[],
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }
}

/// Entities carrying a soft-delete flag.
pub trait Lifecycle {
    const KIND: EntityKind;

    fn is_active(&self) -> bool;

    fn state(&self) -> LifecycleState {
        LifecycleState::from_flag(self.is_active())
    }
}

impl Lifecycle for Schedule {
    const KIND: EntityKind = EntityKind::Schedule;

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Lifecycle for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Pass a looked-up record through the gate.
///
/// # Errors
///
/// Returns `ShiftError::NotFound` when the record is absent or inactive.
pub fn require_active<T: Lifecycle>(record: Option<T>, id: &str) -> Result<T, ShiftError> {
    match record {
        Some(record) if record.state() == LifecycleState::Active => Ok(record),
        _ => Err(ShiftError::not_found(T::KIND, id)),
    }
}

/// Check the result of a deactivating write.
///
/// A conditional write that matched nothing means the record was already
/// gone; one that matched must have left the record in the terminal state.
///
/// # Errors
///
/// Returns `ShiftError::NotFound` when nothing matched, `ShiftError::Unexpected`
/// if the record came back still active.
pub fn require_deactivated<T: Lifecycle>(record: Option<T>, id: &str) -> Result<T, ShiftError> {
    let Some(record) = record else {
        return Err(ShiftError::not_found(T::KIND, id));
    };
    if record.state().is_terminal() {
        Ok(record)
    } else {
        Err(ShiftError::Unexpected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn schedule(active: bool) -> Schedule {
        Schedule {
            id: "sch-00000001".into(),
            account_id: 100,
            agent_id: 201,
            start_time: Utc.with_ymd_and_hms(2099, 5, 1, 11, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2099, 5, 1, 23, 0, 0).unwrap(),
            active,
        }
    }

    #[test]
    fn inactive_is_terminal() {
        assert!(LifecycleState::Inactive.is_terminal());
        assert!(LifecycleState::Inactive.allowed_next_states().is_empty());
    }

    #[test]
    fn active_may_stay_or_deactivate() {
        assert_eq!(
            LifecycleState::Active.allowed_next_states(),
            &[LifecycleState::Active, LifecycleState::Inactive]
        );
        assert!(!LifecycleState::Active.is_terminal());
    }

    #[test]
    fn state_follows_the_active_flag() {
        assert_eq!(schedule(true).state(), LifecycleState::Active);
        assert_eq!(schedule(false).state(), LifecycleState::Inactive);
    }

    #[test]
    fn visibility_admits() {
        assert!(Visibility::ActiveOnly.admits(true));
        assert!(!Visibility::ActiveOnly.admits(false));
        assert!(Visibility::Any.admits(false));
        assert_eq!(Visibility::default(), Visibility::ActiveOnly);
    }

    #[test]
    fn gate_hides_inactive_records() {
        let error = require_active(Some(schedule(false)), "sch-00000001").unwrap_err();
        assert_eq!(
            error,
            ShiftError::not_found(EntityKind::Schedule, "sch-00000001")
        );
    }

    #[test]
    fn gate_reports_missing_as_not_found() {
        let error = require_active::<Task>(None, "tsk-00000009").unwrap_err();
        assert_eq!(error.to_string(), "Task with ID tsk-00000009 not found.");
    }

    #[test]
    fn gate_passes_active_records() {
        let record = require_active(Some(schedule(true)), "sch-00000001").unwrap();
        assert!(record.active);
    }

    #[test]
    fn deactivation_requires_inactive_result() {
        assert!(require_deactivated(Some(schedule(false)), "sch-00000001").is_ok());
        assert_eq!(
            require_deactivated(Some(schedule(true)), "sch-00000001"),
            Err(ShiftError::Unexpected)
        );
        assert!(
            require_deactivated::<Schedule>(None, "sch-00000001")
                .unwrap_err()
                .is_not_found()
        );
    }
}
