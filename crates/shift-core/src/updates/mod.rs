//! Update patches for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are written by a store. The field validator produces these patches
//! from raw update payloads; `deactivate()` is the only way to touch the
//! active flag.

pub mod schedule;
pub mod task;

pub use schedule::{ScheduleUpdate, ScheduleUpdateBuilder};
pub use task::{TaskUpdate, TaskUpdateBuilder};
