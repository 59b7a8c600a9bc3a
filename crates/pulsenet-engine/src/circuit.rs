//! Top-level driver: network, engine and button in one owner.
//!
//! [`Circuit`] is the API external callers use. It is built from the
//! textual description, pressed any number of times, queried for
//! aggregate counts, and asked reachability questions.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`. The network is exclusively
//! owned; there is no shared state and no background thread.

use pulsenet_core::{ConfigError, LogicError, PressId, PulseCounts, PulseError};
use pulsenet_network::{fingerprint, Network};

use crate::config::{EngineConfig, SolveRequest};
use crate::engine::PropagationEngine;
use crate::metrics::PressMetrics;
use crate::solver::{self, Reachability};

/// A network wired to a button.
///
/// # Example
///
/// ```
/// use pulsenet_engine::Circuit;
///
/// let mut circuit = Circuit::build([
///     "broadcaster -> a, b, c",
///     "%a -> b",
///     "%b -> c",
///     "%c -> inv",
///     "&inv -> a",
/// ])?;
/// circuit.push_button(1000)?;
/// assert_eq!(circuit.pulse_product(), 32_000_000);
/// # Ok::<(), pulsenet_core::PulseError>(())
/// ```
#[derive(Debug)]
pub struct Circuit {
    network: Network,
    engine: PropagationEngine,
}

impl Circuit {
    /// Parse and assemble with the default [`EngineConfig`].
    pub fn build<I, S>(lines: I) -> Result<Self, PulseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(lines, EngineConfig::default())
    }

    /// Parse and assemble with an explicit [`EngineConfig`].
    pub fn with_config<I, S>(lines: I, config: EngineConfig) -> Result<Self, PulseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let network = Network::from_lines(lines)?;
        Ok(Self::from_network(network, config)?)
    }

    /// Wrap an already-assembled network.
    pub fn from_network(network: Network, config: EngineConfig) -> Result<Self, ConfigError> {
        let summary = network.summary();
        tracing::debug!(
            modules = network.len(),
            flip_flops = summary.flip_flops,
            conjunctions = summary.conjunctions,
            sinks = summary.sinks,
            "circuit ready"
        );
        Ok(Self {
            network,
            engine: PropagationEngine::new(config)?,
        })
    }

    /// Press the button once and drain.
    pub fn press_once(&mut self) -> Result<PressMetrics, LogicError> {
        self.engine.press(&mut self.network)
    }

    /// Press the button `count` times in sequence.
    ///
    /// Returns the pulses sent by these presses alone.
    pub fn push_button(&mut self, count: u64) -> Result<PulseCounts, LogicError> {
        let mut sent = PulseCounts::ZERO;
        for _ in 0..count {
            sent += self.press_once()?.pulses;
        }
        Ok(sent)
    }

    /// Low pulses sent since the last reset.
    pub fn low_pulse_count(&self) -> u64 {
        self.network.totals().low
    }

    /// High pulses sent since the last reset.
    pub fn high_pulse_count(&self) -> u64 {
        self.network.totals().high
    }

    /// Low pulse count times high pulse count, saturating at `u64::MAX`.
    pub fn pulse_product(&self) -> u64 {
        self.network.totals().product()
    }

    /// Both counts at once.
    pub fn totals(&self) -> PulseCounts {
        self.network.totals()
    }

    /// Presses completed since construction or the last reset.
    pub fn presses(&self) -> PressId {
        self.engine.presses()
    }

    /// Metrics from the most recent successful press.
    pub fn last_metrics(&self) -> &PressMetrics {
        self.engine.last_metrics()
    }

    /// Restore every module and counter to its initial state.
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.network);
    }

    /// The underlying network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// FNV-1a hash of the current network state.
    pub fn fingerprint(&self) -> u64 {
        fingerprint(&self.network)
    }

    /// Minimum presses before `target` receives a low pulse.
    ///
    /// Resets the circuit first and leaves it in its post-solve state.
    /// See [`solver::solve`] for the algorithm and its assumptions.
    pub fn presses_needed_for_low_pulse(
        &mut self,
        target: &str,
        required_sources: usize,
        max_presses: u64,
    ) -> Result<Reachability, PulseError> {
        let request = SolveRequest::new(target)
            .required_sources(required_sources)
            .max_presses(max_presses);
        solver::solve(self, &request)
    }
}
