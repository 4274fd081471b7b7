use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An availability window for an agent within an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub id: String,
    pub account_id: i64,
    pub agent_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(rename = "is_active")]
    pub active: bool,
}

/// A schedule that passed field validation and is ready to insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewSchedule {
    pub account_id: i64,
    pub agent_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl NewSchedule {
    /// Materialize the stored record. New records are always active.
    #[must_use]
    pub const fn into_schedule(self, id: String) -> Schedule {
        Schedule {
            id,
            account_id: self.account_id,
            agent_id: self.agent_id,
            start_time: self.start_time,
            end_time: self.end_time,
            active: true,
        }
    }
}
