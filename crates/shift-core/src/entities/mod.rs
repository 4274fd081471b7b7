//! Entity structs for Schedules and Tasks.
//!
//! Each stored entity maps to a table in the `libSQL` database. The `New*`
//! structs are validated create payloads: they carry no id and no active flag,
//! both of which the store assigns on insert.

mod schedule;
mod task;

pub use schedule::{NewSchedule, Schedule};
pub use task::{NewTask, Task, TaskWithSchedule};
pub(crate) use task::end_after;
