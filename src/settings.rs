//! # Settings Module
//!
//! ## Purpose
//! Numerical tolerances of the equation balancer and the logging level of the application,
//! persisted as a small JSON file (stoich_config.json by default).
//!
//! ## Configuration Format
//! ```json
//! {
//!   "max_denominator": 4000,
//!   "epsilon": 1e-12,
//!   "pivot_tolerance": 1e-12,
//!   "log_level": "info"
//! }
//! ```
//!
//! ## Usage Pattern
//! ```rust
//! use StoichCalc::settings::SettingsManager;
//!
//! let manager = SettingsManager::with_config_file("missing_config.json");
//! assert_eq!(manager.settings().max_denominator, 4000);
//! ```

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "stoich_config.json";

/// error types of loading, validating and saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Tunable numerical parameters of the balancer.
///
/// # Fields
/// * `max_denominator` - bound of the continued fraction expansion used to recover exact fractions
/// * `epsilon` - tolerance of the continued fraction expansion
/// * `pivot_tolerance` - entries with smaller absolute value are not used as Gauss-Jordan pivots
/// * `log_level` - one of off, error, warn, info, debug, trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerSettings {
    pub max_denominator: i64,
    pub epsilon: f64,
    pub pivot_tolerance: f64,
    pub log_level: String,
}

impl Default for BalancerSettings {
    fn default() -> Self {
        Self {
            max_denominator: 4000,
            epsilon: 1e-12,
            pivot_tolerance: 1e-12,
            log_level: "info".to_string(),
        }
    }
}

impl BalancerSettings {
    /// Checks that all values can be used by the balancer.
    ///
    /// # Returns
    /// * `Ok(())` - if all values are usable
    /// * `Err(SettingsError::Invalid)` - naming the first unusable value
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_denominator < 1 {
            return Err(SettingsError::Invalid(format!(
                "max_denominator must be at least 1, got {}",
                self.max_denominator
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "epsilon must be a positive number, got {}",
                self.epsilon
            )));
        }
        if !(self.pivot_tolerance.is_finite() && self.pivot_tolerance > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "pivot_tolerance must be a positive number, got {}",
                self.pivot_tolerance
            )));
        }
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            SettingsError::Invalid(format!("unknown log level '{}'", self.log_level))
        })?;
        Ok(())
    }

    /// log level for the terminal logger, info if the stored value is not recognized
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Loads, updates and saves `BalancerSettings` for one configuration file.
///
/// # Fields
/// * `settings` - Current settings
/// * `config_file` - Path to the configuration file for persistence
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: BalancerSettings,
    config_file: String,
}

impl SettingsManager {
    /// Creates a manager for the default configuration file in the current directory.
    /// Missing or invalid files give the default settings.
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Creates a manager with a custom configuration file path.
    ///
    /// # Arguments
    /// * `config_file` - Path to the configuration file
    pub fn with_config_file(config_file: &str) -> Self {
        let settings = match Self::load_config(config_file) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "cannot use settings from '{}' ({}), falling back to defaults",
                    config_file, e
                );
                BalancerSettings::default()
            }
        };
        Self {
            settings,
            config_file: config_file.to_string(),
        }
    }

    /// Reads and validates settings from a JSON file; a missing file gives the defaults.
    ///
    /// # Returns
    /// * `Ok(BalancerSettings)` - Loaded or default settings
    /// * `Err(SettingsError)` - On I/O errors, malformed JSON or invalid values
    pub fn load_config(config_file: &str) -> Result<BalancerSettings, SettingsError> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let settings: BalancerSettings = serde_json::from_str(&content)?;
            settings.validate()?;
            Ok(settings)
        } else {
            Ok(BalancerSettings::default())
        }
    }

    /// Writes the current settings to the config file as pretty JSON.
    pub fn save_config(&self) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn settings(&self) -> &BalancerSettings {
        &self.settings
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Replaces all settings after validation and saves them.
    pub fn update(&mut self, settings: BalancerSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        self.save_config()
    }

    /// Updates the continued fraction bound and saves the settings.
    pub fn set_max_denominator(&mut self, max_denominator: i64) -> Result<(), SettingsError> {
        let mut settings = self.settings.clone();
        settings.max_denominator = max_denominator;
        self.update(settings)
    }

    /// Updates the logging level and saves the settings.
    pub fn set_log_level(&mut self, log_level: &str) -> Result<(), SettingsError> {
        let mut settings = self.settings.clone();
        settings.log_level = log_level.to_string();
        self.update(settings)
    }

    /// Restores the default settings and saves them.
    pub fn reset_to_defaults(&mut self) -> Result<(), SettingsError> {
        self.settings = BalancerSettings::default();
        self.save_config()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}
