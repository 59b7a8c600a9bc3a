//! State fingerprinting for determinism comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of every module's mutable
//! state and counters. Not cryptographically secure; used only for fast
//! equality checks between runs.

use crate::module::ModuleKind;
use crate::network::Network;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash every module's state and pulse counters.
///
/// Module order is folded in, so two networks only match if their
/// modules are in the same arena order. Wiring is not hashed.
pub fn fingerprint(network: &Network) -> u64 {
    let mut hash = FNV_OFFSET;

    for (id, module) in network.iter() {
        hash = fnv1a_u64(hash, u64::from(id.0));
        match module.kind() {
            ModuleKind::Broadcaster => hash = fnv1a_byte(hash, 0),
            ModuleKind::FlipFlop { on } => {
                hash = fnv1a_byte(hash, 1);
                hash = fnv1a_byte(hash, u8::from(*on));
            }
            ModuleKind::Conjunction { memory } => {
                hash = fnv1a_byte(hash, 2);
                for p in memory {
                    hash = fnv1a_byte(hash, u8::from(p.is_high()));
                }
            }
            ModuleKind::Sink => hash = fnv1a_byte(hash, 3),
        }
        let (sent, received) = (module.sent(), module.received());
        for v in [sent.low, sent.high, received.low, received.high] {
            hash = fnv1a_u64(hash, v);
        }
    }

    hash
}
