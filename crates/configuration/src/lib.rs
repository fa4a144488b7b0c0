use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DashboardConfig, DatasetConfig, LoggingConfig, ServerConfig, Settings};

/// Prefix of the environment variables that override file settings,
/// e.g. `SUPERSTORE__DATASET__PATH=data/orders.csv`.
pub const ENV_PREFIX: &str = "SUPERSTORE";

/// Loads the application settings.
///
/// The file at `path` is optional; every section falls back to its defaults.
/// `SUPERSTORE__<SECTION>__<KEY>` environment variables take precedence over
/// the file. The result is validated before it is returned.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("dataset.date_formats")
                .try_parsing(true),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Granularity;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[dataset]
path = "data/orders.csv"
delimiter = ";"

[dashboard]
default_granularity = "Bulanan"
table_row_limit = 25

[server]
port = 8080
"#
        )
        .unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.dataset.path.to_str(), Some("data/orders.csv"));
        assert_eq!(settings.dataset.delimiter, ';');
        assert_eq!(settings.dashboard.default_granularity, Granularity::Monthly);
        assert_eq!(settings.dashboard.table_row_limit, 25);
        assert_eq!(settings.dashboard.title, "Superstore Dashboard");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 0").unwrap();

        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
