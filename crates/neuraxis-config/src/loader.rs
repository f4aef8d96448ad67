// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 2-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)

use crate::{validate_config, ConfigError, ConfigResult, NeuraxisConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the Neuraxis configuration file
///
/// Search order:
/// 1. `NEURAXIS_CONFIG_PATH` environment variable
/// 2. Current working directory: `./neuraxis_configuration.toml`
/// 3. Parent directories (searches up to 5 levels for the workspace root)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    // 1. Check environment variable first
    if let Ok(env_path) = env::var("NEURAXIS_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by NEURAXIS_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    // 2. Search in common locations
    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join("neuraxis_configuration.toml"));

        // Search up to 5 levels for workspace root
        let mut current = cwd;
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join("neuraxis_configuration.toml"));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Neuraxis configuration file 'neuraxis_configuration.toml' not found in any of these locations:\n{}\n\nSet NEURAXIS_CONFIG_PATH environment variable to specify custom location.",
        search_list
    )))
}

/// Parse configuration from a TOML string
pub fn parse_config(toml_str: &str) -> ConfigResult<NeuraxisConfig> {
    Ok(toml::from_str(toml_str)?)
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, searches for a
///   config file and falls back to built-in defaults when none exists. An
///   explicitly given path that does not exist is an error.
///
/// Environment overrides are applied on top of whatever was loaded, and the
/// result is validated before being returned.
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<NeuraxisConfig> {
    let mut config = match config_path {
        Some(path) => read_config_file(path)?,
        None => match find_config_file() {
            Ok(path) => read_config_file(&path)?,
            // No file anywhere is fine; defaults carry the kernel.
            Err(ConfigError::FileNotFound(_)) => NeuraxisConfig::default(),
            Err(e) => return Err(e),
        },
    };

    apply_environment_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn read_config_file(path: &Path) -> ConfigResult<NeuraxisConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&contents)
}

/// Apply environment variable overrides
///
/// Recognized variables:
/// * `NEURAXIS_LOG_LEVEL` - overrides `logging.level`
/// * `NEURAXIS_MEMORY_REPORT` - overrides `diagnostics.memory_report_enabled`
///   ("1"/"true"/"on" enable, "0"/"false"/"off" disable)
pub fn apply_environment_overrides(config: &mut NeuraxisConfig) {
    if let Ok(level) = env::var("NEURAXIS_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(flag) = env::var("NEURAXIS_MEMORY_REPORT") {
        match flag.to_ascii_lowercase().as_str() {
            "1" | "true" | "on" => config.diagnostics.memory_report_enabled = true,
            "0" | "false" | "off" => config.diagnostics.memory_report_enabled = false,
            _ => {} // unrecognized value, keep configured setting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [system]
            max_cores = 8
            debug = true

            [logging]
            level = "warn"
            format = "json"

            [diagnostics]
            memory_report_enabled = false
            report_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.system.max_cores, 8);
        assert!(config.system.debug);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "json");
        assert!(!config.diagnostics.memory_report_enabled);
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(matches!(
            parse_config("[logging\nlevel = "),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_environment_overrides() {
        // Single test touching the env vars so parallel test threads in this
        // binary never race on them.
        env::set_var("NEURAXIS_LOG_LEVEL", "trace");
        env::set_var("NEURAXIS_MEMORY_REPORT", "off");

        let mut config = NeuraxisConfig::default();
        apply_environment_overrides(&mut config);
        assert_eq!(config.logging.level, "trace");
        assert!(!config.diagnostics.memory_report_enabled);

        env::set_var("NEURAXIS_MEMORY_REPORT", "garbage");
        apply_environment_overrides(&mut config);
        // Unrecognized value leaves the setting alone.
        assert!(!config.diagnostics.memory_report_enabled);

        env::remove_var("NEURAXIS_LOG_LEVEL");
        env::remove_var("NEURAXIS_MEMORY_REPORT");
    }

    #[test]
    fn test_load_config_explicit_missing_path_is_error() {
        let result = load_config(Some(Path::new(
            "/nonexistent/neuraxis_configuration.toml",
        )));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
