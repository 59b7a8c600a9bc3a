//! The module arena and its wiring.
//!
//! [`Network`] owns every [`Module`] in one `Vec`, addressed by
//! [`ModuleId`]. Names resolve to handles through an insertion-ordered
//! map, so iteration follows declaration order with implicit sinks last.
//!
//! # Invariants
//!
//! - Every destination handle refers to a slot in the arena.
//! - Exactly one module is the broadcaster.
//! - `sources` is the deduplicated reverse of `destinations`.

use indexmap::IndexMap;
use pulsenet_core::{ConfigError, LogicError, ModuleId, Origin, Pulse, PulseCounts};

use crate::module::{Module, ModuleKind};

/// Id of the single entry-point module.
pub const BROADCASTER: &str = "broadcaster";

/// Id reserved for the button, which lives outside the network.
pub const BUTTON: &str = "button";

/// Number of modules of each variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindSummary {
    /// Broadcasters (always 1 for an assembled network).
    pub broadcasters: usize,
    /// Flip-flops.
    pub flip_flops: usize,
    /// Conjunctions.
    pub conjunctions: usize,
    /// Implicit sinks.
    pub sinks: usize,
}

/// Arena of modules with resolved wiring.
#[derive(Clone, Debug)]
pub struct Network {
    modules: Vec<Module>,
    names: IndexMap<String, ModuleId>,
    broadcaster: ModuleId,
}

impl Network {
    pub(crate) fn from_parts(
        modules: Vec<Module>,
        names: IndexMap<String, ModuleId>,
        broadcaster: ModuleId,
    ) -> Self {
        Self {
            modules,
            names,
            broadcaster,
        }
    }

    /// Number of modules, sinks included.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// `true` if the arena is empty. Never the case for an assembled network.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Handle of the broadcaster.
    pub fn broadcaster(&self) -> ModuleId {
        self.broadcaster
    }

    /// Module behind a handle.
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id.index())
    }

    /// Module by name.
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.names.get(name).and_then(|&id| self.module(id))
    }

    /// Resolve a name to its handle.
    pub fn id_of(&self, name: &str) -> Result<ModuleId, ConfigError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownModule(name.to_string()))
    }

    /// Name behind a handle.
    pub fn name_of(&self, id: ModuleId) -> Option<&str> {
        self.module(id).map(Module::name)
    }

    /// All modules with their handles, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(i, m)| (ModuleId(i as u32), m))
    }

    /// Sum of every module's received counters.
    ///
    /// Each pulse is received exactly once, so this is the total number
    /// of pulses sent, the button's included.
    pub fn totals(&self) -> PulseCounts {
        self.modules.iter().map(Module::received).sum()
    }

    /// Count modules per variant.
    pub fn summary(&self) -> KindSummary {
        let mut s = KindSummary::default();
        for m in &self.modules {
            match m.kind() {
                ModuleKind::Broadcaster => s.broadcasters += 1,
                ModuleKind::FlipFlop { .. } => s.flip_flops += 1,
                ModuleKind::Conjunction { .. } => s.conjunctions += 1,
                ModuleKind::Sink => s.sinks += 1,
            }
        }
        s
    }

    /// Restore every module to its initial state, keeping the wiring.
    pub fn reset(&mut self) {
        for m in &mut self.modules {
            m.reset();
        }
    }

    fn slot_mut(&mut self, id: ModuleId) -> Result<&mut Module, LogicError> {
        self.modules
            .get_mut(id.index())
            .ok_or(LogicError::DanglingHandle(id))
    }

    /// Count one pulse on the wire `from -> to`.
    ///
    /// Increments the sender's `sent` counter (the button has none) and
    /// the destination's `received` counter.
    pub fn record(&mut self, from: Origin, to: ModuleId, pulse: Pulse) -> Result<(), LogicError> {
        if let Some(sender) = from.module() {
            self.slot_mut(sender)?.record_sent(pulse);
        }
        self.slot_mut(to)?.record_received(pulse);
        Ok(())
    }

    /// Hand one pulse to module `to` and return what it emits, if anything.
    pub fn deliver(
        &mut self,
        to: ModuleId,
        from: Origin,
        pulse: Pulse,
    ) -> Result<Option<Pulse>, LogicError> {
        self.slot_mut(to)?.react(from, pulse)
    }

    /// Send `pulse` from `from` down every outgoing wire.
    ///
    /// Counts each pulse, then calls `enqueue` once per destination in
    /// wiring order. Returns the number of pulses sent.
    pub fn emit(
        &mut self,
        from: ModuleId,
        pulse: Pulse,
        mut enqueue: impl FnMut(ModuleId),
    ) -> Result<usize, LogicError> {
        let fan_out = self.slot_mut(from)?.destinations().len();
        for i in 0..fan_out {
            let to = self.modules[from.index()].destinations()[i];
            self.record(Origin::Module(from), to, pulse)?;
            enqueue(to);
        }
        Ok(fan_out)
    }
}
