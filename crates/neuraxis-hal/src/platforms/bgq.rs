// Copyright 2025 Neuraxis Contributors
// SPDX-License-Identifier: Apache-2.0

/// IBM Blue Gene/Q compute-node memory service
///
/// Blue Gene/Q compute nodes run CNK (Compute Node Kernel), which exposes
/// process memory accounting through the SPI call `Kernel_GetMemorySize`
/// keyed by a region selector (`spi/include/kernel/memory.h`).
///
/// **Integration**:
/// The SPI is part of the CNK system image and is linked in by the BG/Q
/// cross toolchain; no extra crate is needed. This module only compiles with
/// the `platform-bgq` feature, so the extern symbols never leak into builds
/// for other targets.
use crate::hal::{MemoryIntrospection, MemoryRegion};

mod ffi {
    //! Selector values and binding from the CNK SPI header.

    /// `KERNEL_MEMSIZE_STACK`: bytes of stack currently in use
    pub const KERNEL_MEMSIZE_STACK: u32 = 4;
    /// `KERNEL_MEMSIZE_HEAP`: bytes of heap currently in use
    pub const KERNEL_MEMSIZE_HEAP: u32 = 5;

    extern "C" {
        pub fn Kernel_GetMemorySize(mem_type: u32, mem_size: *mut u64) -> u32;
    }
}

/// Memory-introspection service backed by the CNK SPI.
#[derive(Debug, Clone, Copy, Default)]
pub struct BgqMemoryService;

impl BgqMemoryService {
    pub const PLATFORM_NAME: &'static str = "IBM Blue Gene/Q";

    pub fn new() -> Self {
        Self
    }
}

impl MemoryIntrospection for BgqMemoryService {
    fn region_bytes(&self, region: MemoryRegion) -> u64 {
        let selector = match region {
            MemoryRegion::Heap => ffi::KERNEL_MEMSIZE_HEAP,
            MemoryRegion::Stack => ffi::KERNEL_MEMSIZE_STACK,
        };
        let mut size: u64 = 0;
        // The SPI query does not fail on a compute node once this binary is
        // running there; the status code is not consulted.
        // SAFETY: `size` outlives the call and the selector is one of the
        // values the SPI defines.
        unsafe {
            ffi::Kernel_GetMemorySize(selector, &mut size);
        }
        size
    }

    fn platform_name(&self) -> &'static str {
        Self::PLATFORM_NAME
    }
}
