//! Propagation engine: drives one press to quiescence.
//!
//! [`PropagationEngine`] owns the pulse FIFO and the press counter. It
//! borrows the [`Network`] for each operation rather than owning it, so
//! the same engine can drive a network that is reset between runs.
//!
//! # Ordering
//!
//! Every pulse goes through one global FIFO. A module's emission is
//! enqueued for all of its destinations before the next pending pulse is
//! delivered, so all pulses of generation *k* are enqueued before any
//! pulse of generation *k + 1* is processed. Processing depth-first
//! instead gives different counts on networks with fan-out.
//!
//! # Press lifecycle
//!
//! `Idle → Draining → Idle`. A press is never interrupted: it either
//! drains to an empty queue or fails with
//! [`LogicError::DidNotSettle`] when the delivery budget runs out.

use std::time::Instant;

use pulsenet_core::{ConfigError, LogicError, Origin, PressId};
use pulsenet_network::Network;

use crate::button::Button;
use crate::config::EngineConfig;
use crate::metrics::PressMetrics;
use crate::queue::PulseQueue;

/// Single-threaded breadth-first pulse propagation.
#[derive(Debug)]
pub struct PropagationEngine {
    queue: PulseQueue,
    button: Button,
    config: EngineConfig,
    presses: PressId,
    last_metrics: PressMetrics,
}

impl PropagationEngine {
    /// Construct an idle engine.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            queue: PulseQueue::new(config.queue_capacity_hint),
            button: Button,
            config,
            presses: PressId(0),
            last_metrics: PressMetrics::default(),
        })
    }

    /// Whether any pulse awaits delivery.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of pulses awaiting delivery.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deliver exactly one pending pulse.
    ///
    /// Updates the receiving module's state and, if it emits, enqueues the
    /// emitted pulse for each of its destinations. Returns the number of
    /// pulses enqueued.
    pub fn process_next(&mut self, network: &mut Network) -> Result<usize, LogicError> {
        let event = self.queue.pop().ok_or(LogicError::EmptyQueue)?;
        let Some(out) = network.deliver(event.to, event.from, event.pulse)? else {
            return Ok(0);
        };
        let from = event.to;
        let queue = &mut self.queue;
        network.emit(from, out, |to| {
            queue.push(Origin::Module(from), to, out);
        })
    }

    /// Press the button once and drain to quiescence.
    pub fn press(&mut self, network: &mut Network) -> Result<PressMetrics, LogicError> {
        let press = self.presses.next();
        if self.has_pending() {
            return Err(LogicError::DidNotSettle {
                press: self.presses.0,
                deliveries: 0,
                pending: self.queue.len(),
            });
        }

        let start = Instant::now();
        let before = network.totals();
        self.queue.take_high_water();
        self.button.press(&mut self.queue, network)?;

        let mut deliveries = 0u64;
        while self.has_pending() {
            if deliveries >= self.config.max_deliveries_per_press {
                return Err(LogicError::DidNotSettle {
                    press: press.0,
                    deliveries,
                    pending: self.queue.len(),
                });
            }
            self.process_next(network)?;
            deliveries += 1;
        }

        let pulses = network.totals() - before;
        let metrics = PressMetrics {
            press,
            pulses,
            deliveries,
            max_queue_depth: self.queue.take_high_water(),
            elapsed_us: start.elapsed().as_micros() as u64,
        };
        tracing::trace!(
            press = press.0,
            low = pulses.low,
            high = pulses.high,
            deliveries,
            "press settled"
        );
        self.presses = press;
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Reset the network and the engine's own state.
    ///
    /// Drops anything still queued (only possible after a failed press),
    /// restarts timestamps and the press counter.
    pub fn reset(&mut self, network: &mut Network) {
        network.reset();
        self.queue.clear();
        self.presses = PressId(0);
        self.last_metrics = PressMetrics::default();
    }

    /// Presses completed since construction or the last reset.
    pub fn presses(&self) -> PressId {
        self.presses
    }

    /// Metrics from the most recent successful press.
    pub fn last_metrics(&self) -> &PressMetrics {
        &self.last_metrics
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
