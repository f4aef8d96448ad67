// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Catches invalid settings at load time so subsystems can trust the values
//! they are handed.

use crate::NeuraxisConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const FORMATS: &[&str] = &["text", "json"];

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid log level '{0}' (expected one of: trace, debug, info, warn, error)")]
    InvalidLogLevel(String),

    #[error("Invalid {field} format '{value}' (expected 'text' or 'json')")]
    InvalidFormat { field: &'static str, value: String },
}

/// Validate a loaded configuration
pub fn validate_config(config: &NeuraxisConfig) -> Result<(), ConfigValidationError> {
    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        return Err(ConfigValidationError::InvalidLogLevel(
            config.logging.level.clone(),
        ));
    }

    if !FORMATS.contains(&config.logging.format.to_ascii_lowercase().as_str()) {
        return Err(ConfigValidationError::InvalidFormat {
            field: "logging",
            value: config.logging.format.clone(),
        });
    }

    if !FORMATS.contains(&config.diagnostics.report_format.to_ascii_lowercase().as_str()) {
        return Err(ConfigValidationError::InvalidFormat {
            field: "diagnostics report",
            value: config.diagnostics.report_format.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(validate_config(&NeuraxisConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut config = NeuraxisConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_bad_report_format_rejected() {
        let mut config = NeuraxisConfig::default();
        config.diagnostics.report_format = "xml".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidFormat { .. })
        ));
    }
}
