//! Per-press metrics for the propagation engine.

use pulsenet_core::{PressId, PulseCounts};

/// Counts and timing collected during a single press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressMetrics {
    /// Which press these describe.
    pub press: PressId,
    /// Pulses sent during the press, the button's included.
    pub pulses: PulseCounts,
    /// Pulses delivered (equals `pulses.total()` after a full drain).
    pub deliveries: u64,
    /// Peak number of pending pulses.
    pub max_queue_depth: usize,
    /// Wall-clock time for the press, in microseconds.
    pub elapsed_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = PressMetrics::default();
        assert_eq!(m.press, PressId(0));
        assert!(m.pulses.is_zero());
        assert_eq!(m.deliveries, 0);
        assert_eq!(m.max_queue_depth, 0);
        assert_eq!(m.elapsed_us, 0);
    }
}
