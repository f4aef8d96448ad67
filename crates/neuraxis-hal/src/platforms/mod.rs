// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Platform-specific memory-introspection services.
//!
//! Each module binds one compute-node kernel's native query and implements
//! [`MemoryIntrospection`](crate::hal::MemoryIntrospection) over it. Modules
//! compile only when their `platform-*` feature is enabled, so platform
//! checks live here and nowhere else in the kernel.

/// IBM Blue Gene/Q compute-node kernel (CNK).
#[cfg(feature = "platform-bgq")]
pub mod bgq;

#[cfg(feature = "platform-bgq")]
pub use bgq::BgqMemoryService;
