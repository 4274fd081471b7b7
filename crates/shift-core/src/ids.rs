//! ID prefix constants.
//!
//! Every stored entity gets an id of the form `{prefix}-{8 hex chars}`,
//! e.g. `sch-a3f8b2c1`. Stores generate the random part.

pub const PREFIX_SCHEDULE: &str = "sch";
pub const PREFIX_TASK: &str = "tsk";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_SCHEDULE, PREFIX_TASK];

/// Format an id from a prefix and a numeric suffix (`sch-0000002a`).
#[must_use]
pub fn format_id(prefix: &str, suffix: u32) -> String {
    format!("{prefix}-{suffix:08x}")
}
