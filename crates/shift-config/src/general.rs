//! General application configuration.

use serde::{Deserialize, Serialize};

/// Output formats the CLI understands.
pub const OUTPUT_FORMATS: &[&str] = &["json", "raw"];

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}
