//! Propagation engine and reachability solver for pulsenet.
//!
//! [`Circuit`] is the user-facing driver: it owns a
//! [`Network`](pulsenet_network::Network) and a [`PropagationEngine`],
//! presses the button, and reads back aggregate pulse counts.
//! [`solver`] answers how many presses it takes before a module first
//! receives a low pulse.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod button;
pub mod circuit;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod queue;
pub mod solver;

pub use button::Button;
pub use circuit::Circuit;
pub use config::{EngineConfig, SolveRequest};
pub use engine::PropagationEngine;
pub use metrics::PressMetrics;
pub use queue::{PulseEvent, PulseQueue};
pub use solver::{solve, Reachability};
