//! Configuration management for the `DryRock` report engine
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::DryRockError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `DryRock`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DryRockConfig {
    /// Report generation settings
    #[serde(default)]
    pub report: ReportSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings the context builder receives explicitly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Number of calendar days covered, starting today in each area's zone
    #[serde(default = "default_days_ahead")]
    pub days_ahead: u32,
    /// Prefix of every navigation href
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Directory report pages are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Upper bound on `days_ahead`; providers rarely forecast further out
pub const MAX_DAYS_AHEAD: u32 = 16;

// Default value functions
fn default_days_ahead() -> u32 {
    7
}

fn default_base_path() -> String {
    "/pages".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./pages")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            days_ahead: default_days_ahead(),
            base_path: default_base_path(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl DryRockConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // DRYROCK_REPORT__DAYS_AHEAD=3 overrides report.days_ahead
        builder = builder.add_source(
            Environment::with_prefix("DRYROCK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| format!("Failed to build configuration from {}", config_file.display()))?;

        let mut config: DryRockConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dryrock").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.report.days_ahead == 0 {
            self.report.days_ahead = default_days_ahead();
        }
        if self.report.base_path.is_empty() {
            self.report.base_path = default_base_path();
        }
        if self.report.output_dir.as_os_str().is_empty() {
            self.report.output_dir = default_output_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=MAX_DAYS_AHEAD).contains(&self.report.days_ahead) {
            return Err(DryRockError::config(format!(
                "Report days_ahead must be between 1 and {MAX_DAYS_AHEAD}, got {}",
                self.report.days_ahead
            ))
            .into());
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(DryRockError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(DryRockError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.report.base_path.starts_with('/') {
            return Err(DryRockError::config(format!(
                "Report base_path must start with '/', got '{}'",
                self.report.base_path
            ))
            .into());
        }

        Ok(())
    }
}
