use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use shift_config::{DatabaseConfig, ShiftConfig};
use shift_db::service::ShiftService;

use crate::cli::{GlobalFlags, OutputFormat};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ShiftService,
    pub format: OutputFormat,
}

impl AppContext {
    /// Open the database named by `--db` or `database.path` and resolve the
    /// output format.
    pub async fn init(config: ShiftConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let database = flags
            .db
            .clone()
            .map_or(config.database, |path| DatabaseConfig { path });
        if !database.is_in_memory() {
            ensure_parent_dir(&database.path)?;
        }

        let db_path = database.path.as_str();
        let service = ShiftService::new_local(db_path)
            .await
            .with_context(|| format!("failed to open database at '{db_path}'"))?;

        let format = match flags.format {
            Some(format) => format,
            None => resolve_format(&config.general.default_format)?,
        };

        Ok(Self { service, format })
    }
}

fn resolve_format(name: &str) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_str(name, true)
        .map_err(|error| anyhow::anyhow!("invalid general.default_format '{name}': {error}"))
}

fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    match Path::new(db_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display())),
        _ => Ok(()),
    }
}
