//! Schedule update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::Schedule;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "is_active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ScheduleUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.account_id.is_none()
            && self.agent_id.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.active.is_none()
    }

    /// Write every `Some` field onto `schedule`.
    pub fn apply_to(&self, schedule: &mut Schedule) {
        if let Some(account_id) = self.account_id {
            schedule.account_id = account_id;
        }
        if let Some(agent_id) = self.agent_id {
            schedule.agent_id = agent_id;
        }
        if let Some(start_time) = self.start_time {
            schedule.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            schedule.end_time = end_time;
        }
        if let Some(active) = self.active {
            schedule.active = active;
        }
    }
}

pub struct ScheduleUpdateBuilder(ScheduleUpdate);

impl ScheduleUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ScheduleUpdate::default())
    }

    #[must_use]
    pub const fn account_id(mut self, account_id: i64) -> Self {
        self.0.account_id = Some(account_id);
        self
    }

    #[must_use]
    pub const fn agent_id(mut self, agent_id: i64) -> Self {
        self.0.agent_id = Some(agent_id);
        self
    }

    #[must_use]
    pub const fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.0.start_time = Some(start_time);
        self
    }

    #[must_use]
    pub const fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.0.end_time = Some(end_time);
        self
    }

    /// Clear the active flag (soft delete).
    #[must_use]
    pub const fn deactivate(mut self) -> Self {
        self.0.active = Some(false);
        self
    }

    #[must_use]
    pub fn build(self) -> ScheduleUpdate {
        self.0
    }
}

impl Default for ScheduleUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_only_changed_fields() {
        let update = ScheduleUpdateBuilder::new().agent_id(7).deactivate().build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "agent_id": 7, "is_active": false }));
    }

    #[test]
    fn apply_leaves_unset_fields_alone() {
        let start = Utc.with_ymd_and_hms(2099, 5, 1, 11, 0, 0).unwrap();
        let mut schedule = Schedule {
            id: "sch-00000001".into(),
            account_id: 1,
            agent_id: 2,
            start_time: start,
            end_time: Utc.with_ymd_and_hms(2099, 5, 1, 23, 0, 0).unwrap(),
            active: true,
        };
        let new_end = Utc.with_ymd_and_hms(2099, 5, 2, 1, 0, 0).unwrap();
        ScheduleUpdateBuilder::new()
            .end_time(new_end)
            .build()
            .apply_to(&mut schedule);

        assert_eq!(schedule.start_time, start);
        assert_eq!(schedule.end_time, new_end);
        assert_eq!(schedule.account_id, 1);
        assert!(schedule.active);
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(ScheduleUpdate::default().is_empty());
        assert!(!ScheduleUpdateBuilder::new().deactivate().build().is_empty());
    }
}
