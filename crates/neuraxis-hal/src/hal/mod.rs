// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

/// Memory-introspection traits and reading snapshots.
pub mod memory;

// Re-export trait types
pub use memory::{MemoryIntrospection, MemoryReading, MemoryRegion};
