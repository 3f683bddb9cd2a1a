//! Application configuration management.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report export configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// IANA timezone used to render dates and bucket months.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime pattern for date-only columns.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// strftime pattern for date-time columns.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    /// Directory that exported reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn default_datetime_format() -> String {
    "%-m/%-d/%Y, %-I:%M:%S %p".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
            output_dir: default_output_dir(),
        }
    }
}

impl ReportConfig {
    /// Parses the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the name is not a known IANA timezone.
    pub fn timezone(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Config(format!("unknown timezone: {}", self.timezone)))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "vouchdesk=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("VOUCHDESK").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
