//! # shift-core
//!
//! Core types and the validation pipeline for Shiftline.
//!
//! This crate holds everything that decides whether a Schedule or Task may be
//! written, without touching storage:
//! - Entity structs (`Schedule`, `Task`) and their validated drafts
//! - Update patches with `Option` fields and their builders
//! - The format & field validator (raw JSON → typed drafts/patches)
//! - Temporal range rules and the task-in-schedule containment check
//! - The lifecycle gate (active/inactive visibility and transitions)
//! - The `Clock` port used to sample "now"
//! - The error taxonomy surfaced to callers

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod lifecycle;
pub mod updates;
pub mod validate;
