//! The validation pipeline, leaf-first.
//!
//! 1. [`fields`] turns a raw JSON body into a typed draft or patch.
//! 2. [`temporal`] checks the record's own time fields against "now".
//! 3. [`containment`] checks a task span against its parent schedule.
//!
//! Each stage aggregates within itself; the services stop at the first
//! stage that fails.

pub mod containment;
pub mod datetime;
pub mod fields;
pub mod temporal;

pub use datetime::{DATETIME_FORMAT_HINT, parse_datetime_text};
