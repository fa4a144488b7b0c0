use core_types::Granularity;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dataset: DatasetConfig,
    pub dashboard: DashboardConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Where the sales table comes from and how to read it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path of the delimited sales file.
    pub path: PathBuf,
    /// Field delimiter of the file.
    pub delimiter: char,
    /// `chrono` format strings tried, in order, for the two date columns.
    pub date_formats: Vec<String>,
}

/// Presentation settings for the rendered page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    /// Granularity used when a request does not choose one.
    pub default_granularity: Granularity,
    /// Maximum number of rows drawn in the page's data table.
    pub table_row_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

// --- Default Implementations ---
// This allows a user to omit any section from their toml
// and still have it work with sensible defaults.

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("superstore.csv"),
            delimiter: ',',
            date_formats: [
                "%Y-%m-%d",
                "%m/%d/%Y",
                "%d/%m/%Y",
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%dT%H:%M:%S",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Superstore Dashboard".to_string(),
            default_granularity: Granularity::Daily,
            table_row_limit: 500,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "superstore.log".to_string(),
        }
    }
}

impl Settings {
    /// Rejects values that would make loading or serving impossible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.date_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.date_formats must list at least one format".to_string(),
            ));
        }
        if !self.dataset.delimiter.is_ascii() {
            return Err(ConfigError::ValidationError(format!(
                "dataset.delimiter must be a single ASCII character, got {:?}",
                self.dataset.delimiter
            )));
        }
        if self.dashboard.table_row_limit == 0 {
            return Err(ConfigError::ValidationError(
                "dashboard.table_row_limit must be greater than zero".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The `host:port` string the web server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn empty_date_formats_are_rejected() {
        let mut settings = Settings::default();
        settings.dataset.date_formats.clear();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let mut settings = Settings::default();
        settings.dataset.delimiter = '§';
        assert!(settings.validate().is_err());
    }
}
