//! Engine configuration and solve requests.
//!
//! [`EngineConfig`] bounds a single press. [`SolveRequest`] carries the
//! parameters of one reachability query. Both are validated before use.

use pulsenet_core::ConfigError;

/// Default per-press delivery budget.
pub const DEFAULT_MAX_DELIVERIES_PER_PRESS: u64 = 1_000_000;

/// Default press bound for [`SolveRequest::new`].
pub const DEFAULT_MAX_PRESSES: u64 = 100_000;

// ── EngineConfig ───────────────────────────────────────────────────

/// Configuration for a [`PropagationEngine`](crate::PropagationEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deliveries allowed in one press before it is declared unsettled.
    /// A network with a self-sustaining loop never reaches quiescence;
    /// this turns that into a `LogicError` instead of a hang.
    /// Default: 1_000_000.
    pub max_deliveries_per_press: u64,
    /// Initial capacity of the pulse FIFO. Default: 64.
    pub queue_capacity_hint: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_deliveries_per_press: DEFAULT_MAX_DELIVERIES_PER_PRESS,
            queue_capacity_hint: 64,
        }
    }
}

impl EngineConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_deliveries_per_press == 0 {
            return Err(ConfigError::InvalidConfig {
                reason: "max_deliveries_per_press must be at least 1".into(),
            });
        }
        Ok(())
    }
}

// ── SolveRequest ───────────────────────────────────────────────────

/// One reachability query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveRequest {
    /// Module that should receive a low pulse.
    pub target: String,
    /// How many of the target's direct sources must line up at once.
    pub required_sources: usize,
    /// Presses to try before giving up.
    pub max_presses: u64,
}

impl SolveRequest {
    /// A request for one source with the default press bound.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            required_sources: 1,
            max_presses: DEFAULT_MAX_PRESSES,
        }
    }

    /// Set the number of sources that must line up.
    pub fn required_sources(mut self, n: usize) -> Self {
        self.required_sources = n;
        self
    }

    /// Set the press bound.
    pub fn max_presses(mut self, n: u64) -> Self {
        self.max_presses = n;
        self
    }

    /// Check the request is meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::InvalidConfig {
                reason: "target must not be empty".into(),
            });
        }
        if self.required_sources == 0 {
            return Err(ConfigError::InvalidConfig {
                reason: "required_sources must be at least 1".into(),
            });
        }
        Ok(())
    }
}
