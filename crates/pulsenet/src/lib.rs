//! Pulsenet: pulse propagation through networks of flip-flops and
//! conjunctions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all pulsenet sub-crates. For most users, adding `pulsenet` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pulsenet::prelude::*;
//!
//! let mut circuit = Circuit::build([
//!     "broadcaster -> a",
//!     "%a -> inv, con",
//!     "&inv -> b",
//!     "%b -> con",
//!     "&con -> output",
//! ])
//! .unwrap();
//!
//! circuit.push_button(1000).unwrap();
//! assert_eq!(circuit.low_pulse_count(), 4250);
//! assert_eq!(circuit.high_pulse_count(), 2750);
//!
//! let presses = circuit.presses_needed_for_low_pulse("output", 1, 100).unwrap();
//! assert_eq!(presses, Reachability::Presses(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pulsenet-core` | Ids, `Pulse`, `PulseCounts`, errors |
//! | [`network`] | `pulsenet-network` | Module state machine, network assembly, fingerprint |
//! | [`engine`] | `pulsenet-engine` | Propagation engine, `Circuit`, reachability solver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, pulse values, and errors (`pulsenet-core`).
pub use pulsenet_core as types;

/// Module state machine and network assembly (`pulsenet-network`).
pub use pulsenet_network as network;

/// Propagation engine, circuit driver, and solver (`pulsenet-engine`).
pub use pulsenet_engine as engine;

/// Common imports for typical usage.
pub mod prelude {
    pub use pulsenet_core::{
        ConfigError, LogicError, ModuleId, PressId, Pulse, PulseCounts, PulseError,
    };
    pub use pulsenet_engine::{
        Circuit, EngineConfig, PressMetrics, PropagationEngine, Reachability, SolveRequest,
    };
    pub use pulsenet_network::{Module, ModuleKind, Network};
}
