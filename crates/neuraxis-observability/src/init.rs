// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unified logging initialization for Neuraxis
//!
//! Installs the process-wide `tracing` subscriber. Level comes from the
//! logging config, overridable at runtime through `RUST_LOG`.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Initialize logging for the process
///
/// Fails if a global subscriber is already installed, so call exactly once
/// during kernel startup.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json(),
            )
            .try_init(),
    }
    .context("Failed to install global tracing subscriber")?;

    Ok(())
}

/// Initialize logging with default settings
pub fn init_logging_default() -> Result<()> {
    init_logging(&LoggingConfig::default())
}
