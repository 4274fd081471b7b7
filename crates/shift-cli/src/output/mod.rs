use serde::Serialize;
use serde_json::{Value, json};
use shift_core::errors::ShiftError;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// The error body: a `ShiftError` keeps its status class and message. Any
/// other failure is logged with its context chain and reported as an opaque
/// `Unexpected`.
pub fn error_body(error: &anyhow::Error) -> Value {
    let shift = error.downcast_ref::<ShiftError>().map_or_else(
        || {
            tracing::error!(error = %format_args!("{error:#}"), "command failed");
            ShiftError::Unexpected
        },
        Clone::clone,
    );
    json!({
        "status_code": shift.status_code(),
        "message": shift.to_string(),
    })
}

/// Print the error body on stderr.
pub fn report_error(error: &anyhow::Error) {
    eprintln!("{}", error_body(error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shift_core::enums::EntityKind;
    use shift_core::errors::TemporalError;

    #[test]
    fn raw_is_single_line() {
        let rendered = render(&json!({ "a": [1, 2] }), OutputFormat::Raw).unwrap();
        assert_eq!(rendered, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&json!({ "a": 1 }), OutputFormat::Json).unwrap();
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn shift_errors_keep_their_status() {
        let error = anyhow::Error::from(ShiftError::not_found(EntityKind::Task, "tsk-1"));
        assert_eq!(
            error_body(&error),
            json!({ "status_code": 404, "message": "Task with ID tsk-1 not found." })
        );

        let error = anyhow::Error::from(ShiftError::from(TemporalError::PartialWindow));
        assert_eq!(error_body(&error)["status_code"], json!(400));
    }

    #[test]
    fn other_errors_are_opaque_500s() {
        let error = anyhow::anyhow!("disk full at /srv/shiftline/shiftline.db")
            .context("failed to open database");
        let body = error_body(&error);
        assert_eq!(
            body,
            json!({ "status_code": 500, "message": "Internal server error" })
        );
        assert!(!body.to_string().contains("/srv/shiftline"));
    }
}
