//! # Settings Module
//!
//! ## Purpose
//! Presentation settings of solved rate-law values: the magnitude thresholds outside of
//! which values are flagged for scientific notation, and the number of digits printed.
//! The solver core never rounds; these settings only affect the boundary layer.
//!
//! ## Architecture
//! - **FormatSettings**: serializable configuration structure
//! - **SettingsManager**: loading, validation and persistence of the configuration
//! - **Global Access**: `OnceLock<Mutex<_>>` singleton used by the terminal front-end
//! - **Configuration File**: JSON (`rate_law_settings.json` by default)
//!
//! ## Configuration Format
//! ```json
//! {
//!   "small_threshold": 0.001,
//!   "large_threshold": 10000.0,
//!   "precision": 4
//! }
//! ```
//!
//! ## Usage
//! ```rust
//! use KiRate::settings::with_settings;
//!
//! let precision = with_settings(|manager| manager.get_settings().precision);
//! assert!(precision <= 15);
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILE: &str = "rate_law_settings.json";
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid thresholds: need 0 < small ({small}) < large ({large})")]
    InvalidThresholds { small: f64, large: f64 },
    #[error("Precision {0} exceeds the maximum of 15 digits")]
    InvalidPrecision(usize),
}

/// Notation thresholds and printed digits.
///
/// # Fields
/// * `small_threshold` - magnitudes below are shown in scientific notation
/// * `large_threshold` - magnitudes above are shown in scientific notation
/// * `precision` - digits after the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatSettings {
    pub small_threshold: f64,
    pub large_threshold: f64,
    pub precision: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            small_threshold: 1e-3,
            large_threshold: 1e4,
            precision: 4,
        }
    }
}

impl FormatSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (small, large) = (self.small_threshold, self.large_threshold);
        if !(small.is_finite() && large.is_finite() && small > 0.0 && small < large) {
            return Err(SettingsError::InvalidThresholds { small, large });
        }
        if self.precision > MAX_PRECISION {
            return Err(SettingsError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

/// Loads, validates and saves [`FormatSettings`].
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: FormatSettings,
    config_file: String,
}

impl SettingsManager {
    /// Reads `rate_law_settings.json` from the working directory, defaults otherwise
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_SETTINGS_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let settings = match Self::load_config(config_file) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "could not use settings from '{}': {}; using defaults",
                    config_file, e
                );
                FormatSettings::default()
            }
        };
        Self {
            settings,
            config_file: config_file.to_string(),
        }
    }

    /// Missing file means defaults; an unreadable or invalid file is an error
    pub fn load_config(config_file: &str) -> Result<FormatSettings, SettingsError> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let settings: FormatSettings = serde_json::from_str(&content)?;
            settings.validate()?;
            info!("loaded format settings from '{}'", config_file);
            Ok(settings)
        } else {
            Ok(FormatSettings::default())
        }
    }

    pub fn save_config(&self) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn get_settings(&self) -> &FormatSettings {
        &self.settings
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn set_thresholds(&mut self, small: f64, large: f64) -> Result<(), SettingsError> {
        let candidate = FormatSettings {
            small_threshold: small,
            large_threshold: large,
            ..self.settings
        };
        candidate.validate()?;
        self.settings = candidate;
        self.save_config()
    }

    pub fn set_precision(&mut self, precision: usize) -> Result<(), SettingsError> {
        let candidate = FormatSettings {
            precision,
            ..self.settings
        };
        candidate.validate()?;
        self.settings = candidate;
        self.save_config()
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), SettingsError> {
        self.settings = FormatSettings::default();
        self.save_config()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_SETTINGS: OnceLock<Mutex<SettingsManager>> = OnceLock::new();

/// Global settings, loaded from the default file on first use.
/// A poisoned lock is recovered since the settings hold plain values only.
pub fn get_settings_manager() -> MutexGuard<'static, SettingsManager> {
    GLOBAL_SETTINGS
        .get_or_init(|| Mutex::new(SettingsManager::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&SettingsManager) -> R,
{
    let manager = get_settings_manager();
    f(&manager)
}

pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut SettingsManager) -> R,
{
    let mut manager = get_settings_manager();
    f(&mut manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = FormatSettings::default();
        assert_eq!(settings.small_threshold, 1e-3);
        assert_eq!(settings.large_threshold, 1e4);
        assert_eq!(settings.precision, 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let manager = SettingsManager::with_config_file(path.to_str().unwrap());
        assert_eq!(*manager.get_settings(), FormatSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config
            .write_all(br#"{"small_threshold": 0.01, "large_threshold": 1000.0, "precision": 6}"#)
            .unwrap();
        let manager = SettingsManager::with_config_file(temp_config.path().to_str().unwrap());
        assert_eq!(manager.get_settings().small_threshold, 0.01);
        assert_eq!(manager.get_settings().large_threshold, 1000.0);
        assert_eq!(manager.get_settings().precision, 6);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config
            .write_all(br#"{"small_threshold": 10.0, "large_threshold": 1.0, "precision": 4}"#)
            .unwrap();
        let path = temp_config.path().to_str().unwrap();
        assert!(matches!(
            SettingsManager::load_config(path),
            Err(SettingsError::InvalidThresholds { .. })
        ));
        let manager = SettingsManager::with_config_file(path);
        assert_eq!(*manager.get_settings(), FormatSettings::default());
    }

    #[test]
    fn test_setters_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let path = path.to_str().unwrap();
        let mut manager = SettingsManager::with_config_file(path);
        manager.set_thresholds(1e-6, 1e6).unwrap();
        manager.set_precision(2).unwrap();
        assert!(manager.set_precision(40).is_err());
        assert!(manager.set_thresholds(-1.0, 1.0).is_err());
        assert_eq!(manager.get_settings().precision, 2);

        let reloaded = SettingsManager::with_config_file(path);
        assert_eq!(reloaded.get_settings().small_threshold, 1e-6);
        assert_eq!(reloaded.get_settings().precision, 2);

        manager.reset_to_defaults().unwrap();
        let reloaded = SettingsManager::with_config_file(path);
        assert_eq!(*reloaded.get_settings(), FormatSettings::default());
    }
}
