// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource diagnostics reports
//!
//! Turns probe readings into end-of-run summaries and health-check payloads.
//! The probe itself never errors; the contract here is presentational: an
//! unsupported platform renders as an explicit unavailable message so
//! operators are not misled about actual memory pressure.

use neuraxis_hal::{MemoryProbe, MemoryReading};
use serde::Serialize;
use tracing::{info, warn};

/// Operator-facing message for builds without memory introspection
pub const UNAVAILABLE_MESSAGE: &str = "memory statistics unavailable on this platform";

/// Diagnostics error types
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError {
    #[error("Failed to serialize memory report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Machine- and human-renderable memory usage report.
///
/// The `status` tag distinguishes a real measurement from a build without
/// the platform capability; consumers never see bare zeros for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MemoryReport {
    Measured {
        platform: &'static str,
        heap_bytes: u64,
        stack_bytes: u64,
    },
    Unavailable,
}

impl MemoryReport {
    /// Build a report from an already-taken reading.
    pub fn from_reading(reading: &MemoryReading, platform: Option<&'static str>) -> Self {
        if reading.available {
            MemoryReport::Measured {
                platform: platform.unwrap_or("unknown platform"),
                heap_bytes: reading.heap_bytes,
                stack_bytes: reading.stack_bytes,
            }
        } else {
            MemoryReport::Unavailable
        }
    }

    /// Take a fresh snapshot through `probe` and build a report from it.
    pub fn from_probe(probe: &MemoryProbe) -> Self {
        Self::from_reading(&probe.snapshot(), MemoryProbe::platform_name())
    }

    /// Human-readable single-line rendering.
    pub fn render(&self) -> String {
        match self {
            MemoryReport::Measured {
                platform,
                heap_bytes,
                stack_bytes,
            } => format!(
                "memory usage on {}: heap {} bytes, stack {} bytes",
                platform, heap_bytes, stack_bytes
            ),
            MemoryReport::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    /// JSON rendering for machine consumers (health endpoints, run summaries).
    pub fn to_json(&self) -> Result<String, DiagnosticsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Emit a memory usage report through the logging layer.
///
/// Returns the report so callers can also render or serialize it.
pub fn log_memory_report(probe: &MemoryProbe) -> MemoryReport {
    let report = MemoryReport::from_probe(probe);
    match report {
        MemoryReport::Measured {
            platform,
            heap_bytes,
            stack_bytes,
        } => {
            info!(platform, heap_bytes, stack_bytes, "process memory usage");
        }
        MemoryReport::Unavailable => {
            warn!("{}", UNAVAILABLE_MESSAGE);
        }
    }
    report
}
