pub mod dispatch;
pub mod schedule;
pub mod shared;
pub mod task;
