//! The button: the only source of externally injected pulses.

use pulsenet_core::{LogicError, Origin, Pulse, PulseSeq};
use pulsenet_network::Network;

use crate::queue::PulseQueue;

/// Pseudo-module with no inputs that sends one low pulse to the
/// broadcaster per press. Not part of the network arena.
#[derive(Clone, Copy, Debug, Default)]
pub struct Button;

impl Button {
    /// Inject one low pulse into the broadcaster.
    pub fn press(&self, queue: &mut PulseQueue, network: &mut Network) -> Result<PulseSeq, LogicError> {
        let broadcaster = network.broadcaster();
        network.record(Origin::Button, broadcaster, Pulse::Low)?;
        Ok(queue.push(Origin::Button, broadcaster, Pulse::Low))
    }
}
