//! Configuration management for the `TripCraft` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripCraftError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripCraft` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCraftConfig {
    /// Dataset file locations
    #[serde(default)]
    pub datasets: DatasetsConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default planning settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Dataset file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetsConfig {
    /// Directory holding the CSV files
    #[serde(default = "default_datasets_dir")]
    pub dir: String,
    /// Attractions file name within the directory
    #[serde(default = "default_attractions_file")]
    pub attractions_file: String,
    /// Restaurants file name within the directory
    #[serde(default = "default_restaurants_file")]
    pub restaurants_file: String,
    /// Accommodations file name within the directory
    #[serde(default = "default_accommodations_file")]
    pub accommodations_file: String,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory with the static form page
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
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

/// Default planning settings, mirroring the form's initial values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Stay duration in days
    #[serde(default = "default_stay_duration")]
    pub stay_duration: u32,
    /// Nightly budget lower bound in pounds
    #[serde(default = "default_budget_low")]
    pub budget_low: u32,
    /// Nightly budget upper bound in pounds
    #[serde(default = "default_budget_high")]
    pub budget_high: u32,
    /// Number of destination suggestions
    #[serde(default = "default_destination_count")]
    pub destination_count: u32,
}

// Default value functions
fn default_datasets_dir() -> String {
    "data".to_string()
}

fn default_attractions_file() -> String {
    "attractions.csv".to_string()
}

fn default_restaurants_file() -> String {
    "restaurants.csv".to_string()
}

fn default_accommodations_file() -> String {
    "accommodations.csv".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_stay_duration() -> u32 {
    3
}

fn default_budget_low() -> u32 {
    50
}

fn default_budget_high() -> u32 {
    300
}

fn default_destination_count() -> u32 {
    2
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            dir: default_datasets_dir(),
            attractions_file: default_attractions_file(),
            restaurants_file: default_restaurants_file(),
            accommodations_file: default_accommodations_file(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            static_dir: default_static_dir(),
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

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            stay_duration: default_stay_duration(),
            budget_low: default_budget_low(),
            budget_high: default_budget_high(),
            destination_count: default_destination_count(),
        }
    }
}

impl Default for TripCraftConfig {
    fn default() -> Self {
        Self {
            datasets: DatasetsConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl TripCraftConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
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

        // Add environment variable overrides with TRIPCRAFT_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPCRAFT")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripCraftConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripcraft").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.datasets.dir.is_empty() {
            self.datasets.dir = default_datasets_dir();
        }
        if self.datasets.attractions_file.is_empty() {
            self.datasets.attractions_file = default_attractions_file();
        }
        if self.datasets.restaurants_file.is_empty() {
            self.datasets.restaurants_file = default_restaurants_file();
        }
        if self.datasets.accommodations_file.is_empty() {
            self.datasets.accommodations_file = default_accommodations_file();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.stay_duration == 0 {
            self.defaults.stay_duration = default_stay_duration();
        }
        if self.defaults.budget_high == 0 {
            self.defaults.budget_high = default_budget_high();
        }
        if self.defaults.destination_count == 0 {
            self.defaults.destination_count = default_destination_count();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TripCraftError::config("Server port cannot be 0").into());
        }

        if self.defaults.stay_duration < 1 || self.defaults.stay_duration > 30 {
            return Err(TripCraftError::config(
                "Default stay duration must be between 1 and 30 days",
            )
            .into());
        }

        if self.defaults.budget_low > self.defaults.budget_high {
            return Err(TripCraftError::config(
                "Default budget range is inverted, the lower bound exceeds the upper bound",
            )
            .into());
        }

        if self.defaults.budget_high > 1000 {
            return Err(TripCraftError::config(
                "Default nightly budget cannot exceed £1000",
            )
            .into());
        }

        if self.defaults.destination_count < 1 || self.defaults.destination_count > 10 {
            return Err(TripCraftError::config(
                "Default destination count must be between 1 and 10",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripCraftError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripCraftError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = TripCraftConfig::default();
        assert_eq!(config.datasets.dir, "data");
        assert_eq!(config.datasets.attractions_file, "attractions.csv");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.stay_duration, 3);
        assert_eq!(config.defaults.budget_low, 50);
        assert_eq!(config.defaults.budget_high, 300);
    }

    #[test]
    fn test_default_config_passes_validation() {
        let config = TripCraftConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripCraftConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TripCraftConfig::default();
        config.defaults.stay_duration = 45;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("between 1 and 30 days")
        );

        let mut config = TripCraftConfig::default();
        config.defaults.budget_low = 500;
        config.defaults.budget_high = 100;
        assert!(config.validate().is_err());

        let mut config = TripCraftConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = TripCraftConfig::default();
        config.datasets.dir = String::new();
        config.logging.level = String::new();
        config.defaults.stay_duration = 0;

        config.apply_defaults();

        assert_eq!(config.datasets.dir, "data");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.stay_duration, 3);
    }

    #[test]
    fn test_environment_variable_override() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            env::set_var("TRIPCRAFT_LOGGING_LEVEL", "debug");
        }

        let config = TripCraftConfig::load_from_path(Some(PathBuf::from("no-such-config.toml")));

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("TRIPCRAFT_LOGGING_LEVEL");
        }

        let config = config.unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripCraftConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripcraft"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
