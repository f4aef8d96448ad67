// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! # neuraxis-observability
//!
//! Unified observability infrastructure for the Neuraxis kernel.
//!
//! Two concerns live here: structured logging setup over `tracing`
//! ([`init`]), and the resource diagnostics consumer that turns
//! [`MemoryProbe`](neuraxis_hal::MemoryProbe) readings into operator-facing
//! reports ([`diagnostics`]). The diagnostics layer is the one place that
//! decides how an unsupported platform is presented: an explicit
//! "unavailable" message, never a zero that could be mistaken for a
//! measurement.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod diagnostics;
pub mod init;

// Re-export commonly used items
pub use config::{LogFormat, LoggingConfig};
pub use diagnostics::{log_memory_report, DiagnosticsError, MemoryReport, UNAVAILABLE_MESSAGE};
pub use init::{init_logging, init_logging_default};
