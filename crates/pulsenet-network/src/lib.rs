//! Module state machines and network assembly for pulsenet.
//!
//! A [`Network`] is an arena of [`Module`]s addressed by
//! [`ModuleId`](pulsenet_core::ModuleId) handles. Wiring is stored as
//! handle lists in both directions, so no module owns another.
//! [`Network::from_lines`] builds one from the textual description;
//! [`fingerprint`] hashes its mutable state for determinism checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembly;
pub mod fingerprint;
pub mod module;
pub mod network;

pub use assembly::{parse_line, Declaration, DeclaredKind};
pub use fingerprint::fingerprint;
pub use module::{Module, ModuleKind};
pub use network::{KindSummary, Network, BROADCASTER, BUTTON};
