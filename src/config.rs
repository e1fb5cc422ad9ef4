//! Configuration management for the pharmacy locator
//!
//! Handles loading configuration from a TOML file and environment variables,
//! and validates the settings before the server or demo starts.

use crate::PharmacyError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PharmacyLocatorConfig {
    /// Overpass API client settings
    #[serde(default)]
    pub overpass: OverpassConfig,
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Overpass API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Interpreter endpoint
    #[serde(default = "default_overpass_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, also sent as the query's `[timeout:N]`
    #[serde(default = "default_overpass_timeout")]
    pub timeout_seconds: u32,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Radius in meters used when the caller gives none
    #[serde(default = "default_radius_m")]
    pub default_radius_m: u32,
    /// Maximum number of pharmacies returned
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_overpass_base_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_overpass_timeout() -> u32 {
    25
}

fn default_user_agent() -> String {
    "iCare-PharmacyLocator/1.0".to_string()
}

fn default_radius_m() -> u32 {
    3000
}

fn default_max_results() -> usize {
    8
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_overpass_base_url(),
            timeout_seconds: default_overpass_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl OverpassConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_m: default_radius_m(),
            max_results: default_max_results(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

impl PharmacyLocatorConfig {
    /// Load configuration from `config_path`, or the default file location when
    /// `None`, then apply environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // PHARMACY__SERVER__PORT=9000 overrides server.port
        builder = builder.add_source(
            Environment::with_prefix("PHARMACY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PharmacyLocatorConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pharmacy-locator").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.overpass.base_url.is_empty() {
            self.overpass.base_url = default_overpass_base_url();
        }
        if self.overpass.timeout_seconds == 0 {
            self.overpass.timeout_seconds = default_overpass_timeout();
        }
        if self.overpass.user_agent.is_empty() {
            self.overpass.user_agent = default_user_agent();
        }
        if self.search.default_radius_m == 0 {
            self.search.default_radius_m = default_radius_m();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
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
        if self.overpass.timeout_seconds > 300 {
            return Err(
                PharmacyError::config("Overpass timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.search.max_results == 0 || self.search.max_results > 100 {
            return Err(PharmacyError::config("Maximum results must be between 1 and 100").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PharmacyError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PharmacyError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.overpass.base_url.starts_with("http://")
            && !self.overpass.base_url.starts_with("https://")
        {
            return Err(PharmacyError::config(
                "Overpass base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}
