#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use shift_core::clock::FixedClock;
use shift_db::ShiftDb;
use shift_db::memory::MemoryStore;
use shift_db::service::ShiftService;

/// The instant every test service treats as "now".
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
}

pub async fn db_service() -> ShiftService {
    let db = ShiftDb::open_local(":memory:").await.unwrap();
    ShiftService::new(Arc::new(db), Arc::new(FixedClock::new(now())))
}

pub fn memory_service() -> ShiftService {
    memory_service_with_store().0
}

/// A memory-backed service plus a handle on its store, for checking rows
/// the service no longer shows.
pub fn memory_service_with_store() -> (ShiftService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let svc = ShiftService::new(store.clone(), Arc::new(FixedClock::new(now())));
    (svc, store)
}

/// 2099-05-01 11:00 AM to 11:00 PM.
pub fn schedule_body() -> Value {
    json!({
        "account_id": 100,
        "agent_id": 201,
        "start_time": "2099-05-01 11:00 AM",
        "end_time": "2099-05-01 11:00 PM",
    })
}

pub fn task_body(schedule_id: &str, start_time: &str, duration: i64) -> Value {
    json!({
        "account_id": 100,
        "schedule_id": schedule_id,
        "start_time": start_time,
        "duration": duration,
        "type": "work",
    })
}
