// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `neuraxis_configuration.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NeuraxisConfig {
    pub system: SystemConfig,
    pub logging: LoggingConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// System-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Worker threads for kernel subsystems (0 = auto-detect)
    pub max_cores: usize,
    pub debug: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            max_cores: 0, // 0 = auto-detect
            debug: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format ("text" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Diagnostics and resource-reporting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Emit a memory usage report at end of run / on health checks
    pub memory_report_enabled: bool,

    /// Report rendering ("text" or "json")
    pub report_format: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            memory_report_enabled: true,
            report_format: "text".to_string(),
        }
    }
}
