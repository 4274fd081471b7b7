//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use shift_config::ShiftConfig;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/shiftline/state.db"

[general]
default_format = "raw"
"#,
        )?;

        let config: ShiftConfig = Figment::from(Serialized::defaults(ShiftConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/shiftline/state.db");
        assert_eq!(config.general.default_format, "raw");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_format = "raw"
"#,
        )?;

        let config: ShiftConfig = Figment::from(Serialized::defaults(ShiftConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, ".shiftline/shiftline.db");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".shiftline")?;
        jail.create_file(
            ".shiftline/config.toml",
            r#"
[database]
path = ":memory:"
"#,
        )?;

        let config = ShiftConfig::load().expect("config loads");
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn invalid_format_in_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".shiftline")?;
        jail.create_file(
            ".shiftline/config.toml",
            r#"
[general]
default_format = "table"
"#,
        )?;

        let result = ShiftConfig::load();
        assert!(matches!(
            result,
            Err(shift_config::ConfigError::InvalidValue { .. })
        ));
        Ok(())
    });
}
