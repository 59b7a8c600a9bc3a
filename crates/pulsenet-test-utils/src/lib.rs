//! Test fixtures and reference implementations for pulsenet development.
//!
//! Provides the two canonical example networks, a generator for
//! counter-bank networks whose reachability answer is known in closed
//! form, and a depth-first press used to show that delivery order matters.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{counter_bank, counter_network, depth_first_press, CounterBank};

/// Single-cycle network: one press sends 8 low and 4 high pulses.
pub const SCENARIO_A: &str = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";

/// Two-flip-flop network with an undeclared `output` sink.
///
/// 1000 presses send 4250 low and 2750 high pulses.
pub const SCENARIO_B: &str = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";
