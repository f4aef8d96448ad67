// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! # neuraxis-hal
//!
//! Platform abstraction for the Neuraxis simulation kernel.
//!
//! The kernel's diagnostics layer wants one call signature for "how much
//! heap/stack is this process using" on every build target, even though the
//! underlying measurement only exists on specific HPC compute-node kernels.
//! This crate owns that boundary: trait definitions under [`hal`], per-target
//! services under [`platforms`], and the uniform [`MemoryProbe`] front door
//! selected at build time.
//!
//! ## Feature Flags
//! - **`platform-bgq`**: IBM Blue Gene/Q compute-node kernel (CNK) memory
//!   service. Off by default; without a platform feature the probe reports
//!   measurements as unavailable rather than substituting a portable
//!   approximation.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Platform-agnostic trait definitions.
pub mod hal;
/// Platform-specific service implementations.
pub mod platforms;
/// Build-time-selected uniform probe.
pub mod probe;

pub use hal::{MemoryIntrospection, MemoryReading, MemoryRegion};
pub use probe::MemoryProbe;
