// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Neuraxis Configuration System
//!
//! Type-safe configuration loader for the Neuraxis kernel with support for:
//! - TOML file parsing
//! - Environment variable overrides
//! - Defaults-first loading (a missing file is only an error when a path was
//!   given explicitly)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neuraxis_config::{load_config, NeuraxisConfig};
//!
//! // Load configuration with automatic file discovery and overrides
//! let config = load_config(None).expect("Failed to load config");
//!
//! println!("Log level: {}", config.logging.level);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_environment_overrides, find_config_file, load_config, parse_config};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Re-export for convenience
pub use serde;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
