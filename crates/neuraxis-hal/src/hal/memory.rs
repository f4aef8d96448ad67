// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Memory-introspection contract shared by all platform services.

use serde::{Deserialize, Serialize};

/// Selector keying a platform memory query to one region of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryRegion {
    Heap,
    Stack,
}

/// Platform contract for process memory introspection.
///
/// One implementation exists per supported compute-node kernel, selected at
/// build time via a `platform-*` feature. The query is read-only and
/// non-failing once the platform is compiled in; callers that need a
/// may-be-absent answer go through
/// [`MemoryProbe`](crate::probe::MemoryProbe) instead.
pub trait MemoryIntrospection {
    /// Current byte count of `region` as reported by the platform kernel.
    fn region_bytes(&self, region: MemoryRegion) -> u64;

    /// Human-readable platform name (e.g. "IBM Blue Gene/Q").
    fn platform_name(&self) -> &'static str;
}

/// Point-in-time snapshot of process memory usage.
///
/// Constructed fresh on every probe call and owned by the caller; never
/// cached or mutated. When `available` is false the byte fields carry no
/// meaning and must not be rendered as measurements - the diagnostics layer
/// reports "unavailable" instead of a zero that looks real.
///
/// Two successive snapshots carry no ordering guarantee relative to
/// concurrent allocation activity; do not assume monotonicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryReading {
    /// Heap bytes in use, meaningful only when `available` is true
    pub heap_bytes: u64,
    /// Stack bytes in use, meaningful only when `available` is true
    pub stack_bytes: u64,
    /// Whether this build/platform produced a real measurement
    pub available: bool,
}

impl MemoryReading {
    /// A real measurement from a supported platform.
    pub fn measured(heap_bytes: u64, stack_bytes: u64) -> Self {
        Self {
            heap_bytes,
            stack_bytes,
            available: true,
        }
    }

    /// The explicit "no measurement exists on this build" marker.
    pub fn unavailable() -> Self {
        Self {
            heap_bytes: 0,
            stack_bytes: 0,
            available: false,
        }
    }
}
