//! Repository modules implementing storage operations for schedules and tasks.
//!
//! Each module adds methods to `ShiftDb` via `impl ShiftDb` blocks. Update
//! methods are conditional writes: they only touch a row the visibility
//! admits and return `None` when nothing matched.

pub mod schedule;
pub mod task;
