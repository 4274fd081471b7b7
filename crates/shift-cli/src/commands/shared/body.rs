use std::io::Read;

use serde_json::Value;
use shift_core::errors::{ShiftError, ValidationError};

/// Parse a `--data` argument. `-` reads the body from stdin.
pub fn read_body(raw: &str) -> anyhow::Result<Value> {
    if raw == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return parse_body(&buffer);
    }
    parse_body(raw)
}

/// Malformed JSON is a caller error, reported like any other validation failure.
pub fn parse_body(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).map_err(|error| {
        ShiftError::from(ValidationError::single(format!(
            "request body is not valid JSON: {error}"
        )))
        .into()
    })
}
