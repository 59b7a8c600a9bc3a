//! Error types for the pulsenet propagation engine.
//!
//! Two failure families: [`ConfigError`] for bad input text or bad
//! caller-supplied parameters, and [`LogicError`] for violated engine
//! invariants. Neither is ever retried. [`PulseError`] unifies both for
//! operations that can fail either way.

use crate::id::{ModuleId, Origin};

/// Malformed or ambiguous input, surfaced before any press runs.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A declaration starts with a type prefix other than `%` or `&`,
    /// and is not the broadcaster.
    #[error("line {line}: unknown module prefix in '{declaration}'")]
    UnknownPrefix {
        /// 1-based line number.
        line: usize,
        /// The offending left-hand side.
        declaration: String,
    },
    /// A line is missing its `->` separator, chains more than one, or has
    /// an empty id or one containing whitespace.
    #[error("line {line}: malformed declaration '{text}'")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The full line text.
        text: String,
    },
    /// The same id is declared twice.
    #[error("module '{0}' declared more than once")]
    DuplicateModule(String),
    /// No `broadcaster` line was found.
    #[error("network has no broadcaster")]
    MissingBroadcaster,
    /// A declaration uses an id reserved for the button.
    #[error("module id '{0}' is reserved")]
    ReservedId(String),
    /// A query names a module the network does not contain.
    #[error("module '{0}' not found")]
    UnknownModule(String),
    /// Engine configuration or a solve request failed validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which invariant was violated.
        reason: String,
    },
}

/// An internal invariant of the engine was violated.
///
/// These indicate a defect or a network the engine cannot drive to
/// quiescence, never a recoverable condition.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum LogicError {
    /// `process_next()` was called with nothing pending.
    #[error("process_next called with no pending pulse")]
    EmptyQueue,
    /// A press exceeded its delivery budget and left pulses pending.
    #[error("press {press} did not settle: {pending} pulses still pending after {deliveries} deliveries")]
    DidNotSettle {
        /// The press that failed to drain.
        press: u64,
        /// Deliveries processed before giving up.
        deliveries: u64,
        /// Pulses left in the queue.
        pending: usize,
    },
    /// The solver was asked for more independent sources than the
    /// target has.
    #[error("target '{target}' has {available} sources, {required} required")]
    InsufficientSources {
        /// Target module name.
        target: String,
        /// Sources the caller asked for.
        required: usize,
        /// Sources actually wired into the target.
        available: usize,
    },
    /// A conjunction received a pulse from something it is not wired from.
    #[error("module '{receiver}' received a pulse from unwired sender {sender}")]
    UnexpectedSender {
        /// Name of the receiving module.
        receiver: String,
        /// Who sent the pulse.
        sender: Origin,
    },
    /// Combining detected periods overflowed `u64`.
    #[error("period combination overflowed: lcm({left}, {right})")]
    PeriodOverflow {
        /// Accumulated period so far.
        left: u64,
        /// Period being folded in.
        right: u64,
    },
    /// A press count does not fit the signed `-1` sentinel form.
    #[error("press count {0} does not fit a signed sentinel")]
    SentinelOverflow(u64),
    /// A wire references a handle outside the module arena.
    #[error("wire references unknown module handle {0}")]
    DanglingHandle(ModuleId),
}

/// Either failure family.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PulseError {
    /// See [`ConfigError`].
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    /// See [`LogicError`].
    #[error("logic: {0}")]
    Logic(#[from] LogicError),
}
