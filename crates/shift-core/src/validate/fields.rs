//! Format and field validation.
//!
//! One function per schema. Each takes the raw JSON body, checks every
//! recognized field and returns either a typed value or a
//! [`ValidationError`] listing every violation in schema order.
//! Unrecognized fields are ignored and `null` counts as absent.

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use crate::entities::{NewSchedule, NewTask};
use crate::enums::TaskKind;
use crate::errors::ValidationError;
use crate::updates::{ScheduleUpdate, ScheduleUpdateBuilder, TaskUpdate, TaskUpdateBuilder};

use super::datetime::{DATETIME_FORMAT_HINT, parse_datetime_text};

const NOT_AN_OBJECT: &str = "request body must be a JSON object";

/// Validate a schedule creation body.
///
/// # Errors
///
/// Returns [`ValidationError`] if the body is not an object or any of
/// `account_id`, `agent_id`, `start_time`, `end_time` is missing or malformed.
pub fn schedule_create(body: &Value) -> Result<NewSchedule, ValidationError> {
    let mut reader = FieldReader::open(body, Presence::Required)?;
    let account_id = reader.integer("account_id");
    let agent_id = reader.integer("agent_id");
    let start_time = reader.datetime("start_time");
    let end_time = reader.datetime("end_time");

    let (Some(account_id), Some(agent_id), Some(start_time), Some(end_time)) =
        (account_id, agent_id, start_time, end_time)
    else {
        return Err(reader.into_error());
    };
    Ok(NewSchedule {
        account_id,
        agent_id,
        start_time,
        end_time,
    })
}

/// Validate a schedule update body. Every field is optional.
///
/// # Errors
///
/// Returns [`ValidationError`] if the body is not an object or a present
/// field is malformed.
pub fn schedule_update(body: &Value) -> Result<ScheduleUpdate, ValidationError> {
    let mut reader = FieldReader::open(body, Presence::Optional)?;
    let account_id = reader.integer("account_id");
    let agent_id = reader.integer("agent_id");
    let start_time = reader.datetime("start_time");
    let end_time = reader.datetime("end_time");
    reader.finish()?;

    let mut builder = ScheduleUpdateBuilder::new();
    if let Some(account_id) = account_id {
        builder = builder.account_id(account_id);
    }
    if let Some(agent_id) = agent_id {
        builder = builder.agent_id(agent_id);
    }
    if let Some(start_time) = start_time {
        builder = builder.start_time(start_time);
    }
    if let Some(end_time) = end_time {
        builder = builder.end_time(end_time);
    }
    Ok(builder.build())
}

/// Validate a task creation body.
///
/// # Errors
///
/// Returns [`ValidationError`] if the body is not an object or any of
/// `account_id`, `schedule_id`, `start_time`, `duration`, `type` is missing
/// or malformed.
pub fn task_create(body: &Value) -> Result<NewTask, ValidationError> {
    let mut reader = FieldReader::open(body, Presence::Required)?;
    let account_id = reader.integer("account_id");
    let schedule_id = reader.string("schedule_id");
    let start_time = reader.datetime("start_time");
    let duration = reader.duration();
    let kind = reader.task_kind();

    let (Some(account_id), Some(schedule_id), Some(start_time), Some(duration), Some(kind)) =
        (account_id, schedule_id, start_time, duration, kind)
    else {
        return Err(reader.into_error());
    };
    Ok(NewTask {
        account_id,
        schedule_id: schedule_id.to_string(),
        start_time,
        duration,
        kind,
    })
}

/// Validate a task update body. Every field is optional.
///
/// # Errors
///
/// Returns [`ValidationError`] if the body is not an object or a present
/// field is malformed.
pub fn task_update(body: &Value) -> Result<TaskUpdate, ValidationError> {
    let mut reader = FieldReader::open(body, Presence::Optional)?;
    let account_id = reader.integer("account_id");
    let schedule_id = reader.string("schedule_id");
    let start_time = reader.datetime("start_time");
    let duration = reader.duration();
    let kind = reader.task_kind();
    reader.finish()?;

    let mut builder = TaskUpdateBuilder::new();
    if let Some(account_id) = account_id {
        builder = builder.account_id(account_id);
    }
    if let Some(schedule_id) = schedule_id {
        builder = builder.schedule_id(schedule_id);
    }
    if let Some(start_time) = start_time {
        builder = builder.start_time(start_time);
    }
    if let Some(duration) = duration {
        builder = builder.duration(duration);
    }
    if let Some(kind) = kind {
        builder = builder.kind(kind);
    }
    Ok(builder.build())
}

// ---------------------------------------------------------------------------
// FieldReader
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

/// Reads typed fields out of a JSON object, recording a message for every
/// violation. Each accessor returns `None` exactly when the field is absent
/// or it recorded a violation.
struct FieldReader<'a> {
    body: &'a Map<String, Value>,
    presence: Presence,
    errors: Vec<String>,
}

impl<'a> FieldReader<'a> {
    fn open(body: &'a Value, presence: Presence) -> Result<Self, ValidationError> {
        let Value::Object(body) = body else {
            return Err(ValidationError::single(NOT_AN_OBJECT));
        };
        Ok(Self {
            body,
            presence,
            errors: Vec::new(),
        })
    }

    fn reject(&mut self, message: String) {
        self.errors.push(message);
    }

    fn present(&mut self, name: &str) -> Option<&'a Value> {
        let value = self.body.get(name).filter(|value| !value.is_null());
        if value.is_none() && self.presence == Presence::Required {
            self.reject(format!("{name} cannot be empty"));
        }
        value
    }

    fn integer(&mut self, name: &str) -> Option<i64> {
        let value = self.present(name)?;
        let parsed = value.as_number().and_then(integral);
        if parsed.is_none() {
            self.reject(format!("{name} should be integer"));
        }
        parsed
    }

    fn string(&mut self, name: &str) -> Option<&'a str> {
        match self.present(name)?.as_str() {
            Some("") => {
                self.reject(format!("{name} cannot be empty"));
                None
            }
            Some(text) => Some(text),
            None => {
                self.reject(format!("{name} should be string"));
                None
            }
        }
    }

    fn datetime(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let value = self.present(name)?;
        if value.as_str() == Some("") {
            self.reject(format!("{name} cannot be empty"));
            return None;
        }
        let parsed = value.as_str().and_then(parse_datetime_text);
        if parsed.is_none() {
            self.reject(format!(
                "{name} must be in \"{DATETIME_FORMAT_HINT}\" format"
            ));
        }
        parsed
    }

    fn duration(&mut self) -> Option<i64> {
        let minutes = self.integer("duration")?;
        if minutes <= 0 {
            self.reject("duration must be a positive integer".to_string());
            return None;
        }
        Some(minutes)
    }

    fn task_kind(&mut self) -> Option<TaskKind> {
        let text = self.string("type")?;
        let parsed = text.parse::<TaskKind>().ok();
        if parsed.is_none() {
            let names: Vec<&str> = TaskKind::ALL.iter().map(|kind| kind.as_str()).collect();
            self.reject(format!("type must be one of: {}", names.join(", ")));
        }
        parsed
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> ValidationError {
        ValidationError::new(self.errors)
    }
}

/// A JSON number with no fractional part that fits in `i64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    let value = number.as_f64()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}
