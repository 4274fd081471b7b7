//! Shared test utilities for shift-db unit tests.

pub(crate) mod helpers {
    use chrono::{DateTime, TimeZone, Utc};

    use shift_core::entities::{NewSchedule, NewTask};
    use shift_core::enums::TaskKind;

    use crate::ShiftDb;

    pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2099, 5, 1, hour, minute, 0).unwrap()
    }

    /// Open an in-memory database with migrations applied.
    pub async fn test_db() -> ShiftDb {
        ShiftDb::open_local(":memory:").await.unwrap()
    }

    /// 2099-05-01 11:00 to 23:00 UTC.
    pub fn sample_schedule() -> NewSchedule {
        NewSchedule {
            account_id: 100,
            agent_id: 201,
            start_time: at(11, 0),
            end_time: at(23, 0),
        }
    }

    /// A one-hour work task at noon.
    pub fn sample_task(schedule_id: &str) -> NewTask {
        NewTask {
            account_id: 100,
            schedule_id: schedule_id.to_string(),
            start_time: at(12, 0),
            duration: 60,
            kind: TaskKind::Work,
        }
    }
}
