//! Benchmark profiles for the pulsenet propagation engine.
//!
//! Provides pre-built circuits shared by the criterion benches: a
//! realistic four-counter network of twelve-bit counters feeding one gate.

#![forbid(unsafe_code)]

use pulsenet_engine::Circuit;
use pulsenet_test_utils::{counter_network, CounterBank};

/// Twelve-bit counter periods, all odd and pairwise coprime.
pub const REFERENCE_PERIODS: [u64; 4] = [3733, 3793, 3917, 4057];

/// Text of the reference network: four counters into `gate`, `gate` into `rx`.
pub fn reference_text() -> String {
    counter_network(
        &[CounterBank {
            prefix: "",
            gate: "gate",
            periods: &REFERENCE_PERIODS,
        }],
        "rx",
    )
}

/// Build the reference circuit.
///
/// # Panics
///
/// Panics if the generated text fails to assemble, which would be a bug
/// in the generator.
pub fn reference_circuit() -> Circuit {
    Circuit::build(reference_text().lines()).expect("reference network must assemble")
}
