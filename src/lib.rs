//! # Neuraxis - Bio-Inspired Simulation Kernel Core
//!
//! Neuraxis is the foundation layer of a simulation kernel: the leaf
//! primitives that schedulers, node managers, and network builders call into
//! but do not reimplement. This umbrella crate re-exports the workspace
//! members.
//!
//! ## Components
//!
//! - **Symbolic core** ([`structures`]): interned [`Name`](prelude::Name)
//!   tokens issued by a [`NameInterner`](prelude::NameInterner), and the
//!   ordered, duplicate-tolerant [`NamedTypeTable`](prelude::NamedTypeTable)
//!   the interpreter layer builds type signatures from.
//! - **Platform diagnostics** ([`hal`]): the capability-gated
//!   [`MemoryProbe`](prelude::MemoryProbe) reporting process heap/stack usage
//!   on supported compute-node kernels and an explicit "unavailable" marker
//!   everywhere else.
//! - **Infrastructure** ([`config`], [`observability`]): TOML configuration
//!   loading and tracing-based logging plus memory usage reports.
//!
//! ## Feature Flags
//!
//! ### Platform Targets
//! - **`platform-bgq`**: IBM Blue Gene/Q compute-node kernel memory service.
//!   Without a platform feature the probe builds everywhere and reports
//!   measurements as unavailable.
//!
//! ## Quick Start
//!
//! ```rust
//! use neuraxis::prelude::*;
//!
//! // Symbol table for a type signature
//! let mut interner = NameInterner::new();
//! let mut signature = NamedTypeTable::new();
//! signature.append(interner.intern("doubletype"));
//! signature.append(interner.intern("integertype"));
//! assert_eq!(signature.index_of(interner.intern("integertype")), Some(1));
//!
//! // Memory diagnostics, uniform across targets
//! let probe = MemoryProbe::new();
//! let report = MemoryReport::from_probe(&probe);
//! println!("{}", report.render());
//! ```

pub use neuraxis_config as config;
pub use neuraxis_hal as hal;
pub use neuraxis_observability as observability;
pub use neuraxis_structures as structures;

/// Commonly used types, one import away.
pub mod prelude {
    pub use neuraxis_config::{load_config, NeuraxisConfig};
    pub use neuraxis_hal::{MemoryIntrospection, MemoryProbe, MemoryReading, MemoryRegion};
    pub use neuraxis_observability::{
        init_logging, log_memory_report, LogFormat, LoggingConfig, MemoryReport,
    };
    pub use neuraxis_structures::symbolic::{Name, NameInterner, NamedTypeTable};
    pub use neuraxis_structures::NeuraxisDataError;
}
