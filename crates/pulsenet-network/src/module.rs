//! The per-module state machine.
//!
//! [`ModuleKind`] holds the mutable state of each variant and the
//! transition table lives in one exhaustive match in
//! [`Module::react()`]. Queuing is not the module's concern: the engine
//! owns a single FIFO and calls `react()` once per delivered pulse.

use pulsenet_core::{LogicError, ModuleId, ModuleList, Origin, Pulse, PulseCounts};
use smallvec::SmallVec;

/// Variant-specific state of a module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModuleKind {
    /// Re-emits every received pulse unchanged.
    Broadcaster,
    /// Toggles on low input, ignores high input.
    FlipFlop {
        /// Current state; `false` (off) initially.
        on: bool,
    },
    /// Remembers the last pulse from each source.
    Conjunction {
        /// Last pulse per source, aligned with [`Module::sources`].
        memory: SmallVec<[Pulse; 4]>,
    },
    /// Referenced as a destination but never declared. Only counts.
    Sink,
}

impl ModuleKind {
    /// Short human-readable name of the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Broadcaster => "broadcaster",
            Self::FlipFlop { .. } => "flip-flop",
            Self::Conjunction { .. } => "conjunction",
            Self::Sink => "sink",
        }
    }
}

/// One node of the network.
#[derive(Clone, Debug)]
pub struct Module {
    name: String,
    kind: ModuleKind,
    destinations: ModuleList,
    sources: ModuleList,
    sent: PulseCounts,
    received: PulseCounts,
}

impl Module {
    /// A module with no wiring yet.
    pub fn new(name: impl Into<String>, kind: ModuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
            destinations: ModuleList::new(),
            sources: ModuleList::new(),
            sent: PulseCounts::ZERO,
            received: PulseCounts::ZERO,
        }
    }

    /// The declared (or implicitly referenced) id.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant and state.
    pub fn kind(&self) -> &ModuleKind {
        &self.kind
    }

    /// Outgoing wires in declaration order. Duplicates mean duplicate wires.
    pub fn destinations(&self) -> &[ModuleId] {
        &self.destinations
    }

    /// Distinct modules wired into this one, in first-wired order.
    pub fn sources(&self) -> &[ModuleId] {
        &self.sources
    }

    /// Pulses this module has emitted since the last reset.
    pub fn sent(&self) -> PulseCounts {
        self.sent
    }

    /// Pulses delivered to this module since the last reset.
    pub fn received(&self) -> PulseCounts {
        self.received
    }

    /// Whether a flip-flop is on. `None` for other variants.
    pub fn is_on(&self) -> Option<bool> {
        match self.kind {
            ModuleKind::FlipFlop { on } => Some(on),
            _ => None,
        }
    }

    /// Remembered pulse from `source`. `None` unless this is a conjunction
    /// wired from `source`.
    pub fn remembered(&self, source: ModuleId) -> Option<Pulse> {
        match &self.kind {
            ModuleKind::Conjunction { memory } => self
                .sources
                .iter()
                .position(|&s| s == source)
                .map(|i| memory[i]),
            _ => None,
        }
    }

    pub(crate) fn set_destinations(&mut self, destinations: ModuleList) {
        self.destinations = destinations;
    }

    /// Register an incoming wire. Repeated wires from the same source
    /// share one memory slot.
    pub(crate) fn add_source(&mut self, source: ModuleId) {
        if self.sources.contains(&source) {
            return;
        }
        self.sources.push(source);
        if let ModuleKind::Conjunction { memory } = &mut self.kind {
            memory.push(Pulse::Low);
        }
    }

    pub(crate) fn record_sent(&mut self, pulse: Pulse) {
        self.sent.record(pulse);
    }

    pub(crate) fn record_received(&mut self, pulse: Pulse) {
        self.received.record(pulse);
    }

    /// Apply one delivered pulse and decide what to emit.
    ///
    /// Returns the pulse to send to every destination, or `None` if this
    /// variant stays silent. A conjunction receiving from a module it is
    /// not wired from (or from the button) is a wiring defect.
    pub fn react(&mut self, from: Origin, pulse: Pulse) -> Result<Option<Pulse>, LogicError> {
        match &mut self.kind {
            ModuleKind::Broadcaster => Ok(Some(pulse)),
            ModuleKind::FlipFlop { on } => match pulse {
                Pulse::High => Ok(None),
                Pulse::Low => {
                    *on = !*on;
                    Ok(Some(Pulse::from(*on)))
                }
            },
            ModuleKind::Conjunction { memory } => {
                let slot = from
                    .module()
                    .and_then(|id| self.sources.iter().position(|&s| s == id))
                    .ok_or_else(|| LogicError::UnexpectedSender {
                        receiver: self.name.clone(),
                        sender: from,
                    })?;
                memory[slot] = pulse;
                Ok(Some(Pulse::from(!memory.iter().all(|p| p.is_high()))))
            }
            ModuleKind::Sink => Ok(None),
        }
    }

    /// Restore the initial state: flip-flops off, conjunction memories
    /// low, counters zero. Wiring is kept.
    pub fn reset(&mut self) {
        match &mut self.kind {
            ModuleKind::FlipFlop { on } => *on = false,
            ModuleKind::Conjunction { memory } => memory.fill(Pulse::Low),
            ModuleKind::Broadcaster | ModuleKind::Sink => {}
        }
        self.sent = PulseCounts::ZERO;
        self.received = PulseCounts::ZERO;
    }
}
