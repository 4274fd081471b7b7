//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the column decoding.

use chrono::{DateTime, Utc};

use shift_core::lifecycle::Visibility;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Timestamps are stored as RFC 3339 (`"2099-05-01T11:00:00+00:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not RFC 3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all shift-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read an `is_active` INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Extra `WHERE` condition for a visibility, to append after `id = ?n`.
#[must_use]
pub const fn visibility_clause(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::ActiveOnly => " AND is_active = 1",
        Visibility::Any => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shift_core::enums::TaskKind;

    #[test]
    fn parses_stored_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2099, 5, 1, 11, 0, 0).unwrap();
        assert_eq!(parse_datetime("2099-05-01T11:00:00+00:00").unwrap(), expected);
        assert_eq!(
            parse_datetime(&expected.to_rfc3339()).unwrap(),
            expected
        );
    }

    #[test]
    fn rejects_anything_but_rfc3339() {
        assert!(matches!(
            parse_datetime("2099-05-01 11:00:00"),
            Err(DatabaseError::Query(_))
        ));
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn parses_stored_task_kinds() {
        assert_eq!(parse_enum::<TaskKind>("break").unwrap(), TaskKind::Break);
        assert!(parse_enum::<TaskKind>("nap").is_err());
    }

    #[test]
    fn visibility_clause_filters_only_active() {
        assert_eq!(visibility_clause(Visibility::ActiveOnly), " AND is_active = 1");
        assert_eq!(visibility_clause(Visibility::Any), "");
    }
}
