//! Global pulse FIFO with monotonic send sequence numbers.
//!
//! [`PulseQueue`] holds every pulse that has been sent but not yet
//! delivered. Pulses are delivered strictly in send order, which makes
//! propagation breadth-first: everything emitted while processing one
//! generation is enqueued before any of it is processed.

use std::collections::VecDeque;

use pulsenet_core::{ModuleId, Origin, Pulse, PulseSeq};

/// A sent, not yet delivered pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseEvent {
    /// Send timestamp.
    pub seq: PulseSeq,
    /// Sender.
    pub from: Origin,
    /// Receiver.
    pub to: ModuleId,
    /// Value carried.
    pub pulse: Pulse,
}

/// FIFO of pending pulses.
#[derive(Debug)]
pub struct PulseQueue {
    queue: VecDeque<PulseEvent>,
    next_seq: u64,
    high_water: usize,
}

impl PulseQueue {
    /// Create an empty queue with room for `capacity` pulses.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Enqueue a pulse and return its send timestamp.
    pub fn push(&mut self, from: Origin, to: ModuleId, pulse: Pulse) -> PulseSeq {
        let seq = PulseSeq(self.next_seq);
        self.next_seq += 1;
        self.queue.push_back(PulseEvent {
            seq,
            from,
            to,
            pulse,
        });
        self.high_water = self.high_water.max(self.queue.len());
        seq
    }

    /// Dequeue the oldest pulse.
    pub fn pop(&mut self) -> Option<PulseEvent> {
        self.queue.pop_front()
    }

    /// Number of pending pulses.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest queue length since the last [`take_high_water`](Self::take_high_water).
    pub fn take_high_water(&mut self) -> usize {
        std::mem::replace(&mut self.high_water, self.queue.len())
    }

    /// Timestamp the next push will receive.
    pub fn next_seq(&self) -> PulseSeq {
        PulseSeq(self.next_seq)
    }

    /// Drop everything pending and restart timestamps at zero.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.next_seq = 0;
        self.high_water = 0;
    }
}
