//! Core types for the pulsenet propagation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: module
//! handles, press and sequence counters, the binary [`Pulse`] value with
//! its [`PulseCounts`] tally, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod pulse;

pub use error::{ConfigError, LogicError, PulseError};
pub use id::{ModuleId, ModuleList, Origin, PressId, PulseSeq};
pub use pulse::{Pulse, PulseCounts};
