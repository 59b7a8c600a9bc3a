//! Reachability solver: presses until a module first receives low.
//!
//! Simulating press by press until the target sees a low pulse is
//! hopeless for networks built from long binary counters. Instead the
//! solver watches the target's sources one level further up and measures
//! how often each of them goes high.
//!
//! # Algorithm
//!
//! 1. Reset the circuit.
//! 2. For each direct source of the target, watch that source's own
//!    inputs (the second-order sources).
//! 3. Press one at a time. After each press, record for every watched
//!    input the first press at which it has ever sent a high pulse.
//! 4. A direct source is resolved once all of its inputs have a recorded
//!    press; its period is the LCM of those presses.
//! 5. Once `required_sources` direct sources are resolved, the answer is
//!    the LCM of the smallest `required_sources` periods.
//!
//! # Assumptions
//!
//! This is exact only when every watched subnetwork behaves like an
//! independent counter that first goes high at the end of its first
//! period. Arbitrary wiring can break that. The press bound is the
//! fallback: when it runs out the answer is [`Reachability::NotFound`],
//! never a guess.

use indexmap::IndexMap;
use pulsenet_core::{LogicError, ModuleId, PressId, PulseError};
use pulsenet_network::{Network, BROADCASTER, BUTTON};

use crate::circuit::Circuit;
use crate::config::SolveRequest;

/// Outcome of a reachability query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reachability {
    /// The target first receives low after this many presses.
    Presses(u64),
    /// The press bound ran out before enough sources resolved.
    NotFound,
}

impl Reachability {
    /// Press count, or `None` if not found.
    pub fn presses(self) -> Option<u64> {
        match self {
            Self::Presses(n) => Some(n),
            Self::NotFound => None,
        }
    }

    /// Press count as a signed integer, `-1` when not found.
    ///
    /// [`presses`](Self::presses) is the lossless accessor; a count above
    /// `i64::MAX` is [`LogicError::SentinelOverflow`] here.
    pub fn as_sentinel(self) -> Result<i64, LogicError> {
        match self {
            Self::Presses(n) => i64::try_from(n).map_err(|_| LogicError::SentinelOverflow(n)),
            Self::NotFound => Ok(-1),
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, failing on overflow.
pub fn lcm(a: u64, b: u64) -> Result<u64, LogicError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or(LogicError::PeriodOverflow { left: a, right: b })
}

fn lcm_all(values: impl IntoIterator<Item = u64>) -> Result<u64, LogicError> {
    values.into_iter().try_fold(1, lcm)
}

/// A direct source of the target and what is known about its inputs.
#[derive(Debug)]
struct WatchedSource {
    id: ModuleId,
    inputs: Vec<ModuleId>,
    period: Option<u64>,
}

/// Second-order sources under observation.
#[derive(Debug)]
struct WatchList {
    sources: Vec<WatchedSource>,
    first_high: IndexMap<ModuleId, PressId>,
}

impl WatchList {
    fn build(network: &Network, target: ModuleId, request: &SolveRequest) -> Result<Self, LogicError> {
        let module = network
            .module(target)
            .ok_or(LogicError::DanglingHandle(target))?;
        let direct = module.sources();
        if request.required_sources > direct.len() {
            return Err(LogicError::InsufficientSources {
                target: request.target.clone(),
                required: request.required_sources,
                available: direct.len(),
            });
        }

        let mut sources = Vec::with_capacity(direct.len());
        for &id in direct {
            let inputs = network
                .module(id)
                .ok_or(LogicError::DanglingHandle(id))?
                .sources()
                .to_vec();
            sources.push(WatchedSource {
                id,
                inputs,
                period: None,
            });
        }
        Ok(Self {
            sources,
            first_high: IndexMap::new(),
        })
    }

    /// Record first-high presses and resolve any source whose inputs are
    /// all known.
    fn observe(&mut self, network: &Network, press: PressId) -> Result<(), LogicError> {
        for source in self.sources.iter_mut().filter(|s| s.period.is_none()) {
            for &input in &source.inputs {
                if self.first_high.contains_key(&input) {
                    continue;
                }
                let sent = network
                    .module(input)
                    .ok_or(LogicError::DanglingHandle(input))?
                    .sent();
                if sent.high > 0 {
                    self.first_high.insert(input, press);
                }
            }
            if source.inputs.iter().all(|i| self.first_high.contains_key(i)) {
                let period = lcm_all(source.inputs.iter().map(|i| self.first_high[i].0))?;
                tracing::debug!(
                    source = network.name_of(source.id).unwrap_or_default(),
                    period,
                    press = press.0,
                    "source resolved"
                );
                source.period = Some(period);
            }
        }
        Ok(())
    }

    fn resolved(&self) -> usize {
        self.sources.iter().filter(|s| s.period.is_some()).count()
    }

    /// LCM of the `count` smallest resolved periods.
    fn combine(&self, count: usize) -> Result<u64, LogicError> {
        let mut periods: Vec<u64> = self.sources.iter().filter_map(|s| s.period).collect();
        periods.sort_unstable();
        lcm_all(periods.into_iter().take(count))
    }
}

/// Minimum presses before `request.target` receives a low pulse.
///
/// The button is answered with 0 and the broadcaster with 1 without
/// pressing. Otherwise the circuit is reset and driven as described in the
/// module docs, and left in its final state.
///
/// # Errors
///
/// - [`ConfigError`](pulsenet_core::ConfigError) if the request is invalid
///   or names an unknown module.
/// - [`LogicError::InsufficientSources`] if the target has fewer direct
///   sources than `required_sources`.
/// - Any [`LogicError`] raised while pressing.
pub fn solve(circuit: &mut Circuit, request: &SolveRequest) -> Result<Reachability, PulseError> {
    request.validate()?;
    match request.target.as_str() {
        BUTTON => return Ok(Reachability::Presses(0)),
        BROADCASTER => return Ok(Reachability::Presses(1)),
        _ => {}
    }

    let target = circuit.network().id_of(&request.target)?;
    circuit.reset();
    let mut watch = WatchList::build(circuit.network(), target, request)?;
    tracing::debug!(
        module = %request.target,
        direct_sources = watch.sources.len(),
        required = request.required_sources,
        max_presses = request.max_presses,
        "solving reachability"
    );

    for _ in 0..request.max_presses {
        let metrics = circuit.press_once()?;
        watch.observe(circuit.network(), metrics.press)?;
        if watch.resolved() >= request.required_sources {
            let presses = watch.combine(request.required_sources)?;
            tracing::debug!(
                module = %request.target,
                presses,
                simulated = metrics.press.0,
                "reachability solved"
            );
            return Ok(Reachability::Presses(presses));
        }
    }

    tracing::warn!(
        module = %request.target,
        max_presses = request.max_presses,
        resolved = watch.resolved(),
        required = request.required_sources,
        "press bound exhausted"
    );
    Ok(Reachability::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsenet_core::ConfigError;
    use pulsenet_test_utils::SCENARIO_B;

    #[test]
    fn lcm_basics() {
        assert_eq!(lcm(4, 6), Ok(12));
        assert_eq!(lcm(7, 1), Ok(7));
        assert_eq!(lcm(0, 5), Ok(0));
        assert_eq!(lcm_all([3, 5, 7]), Ok(105));
        assert_eq!(lcm_all(std::iter::empty()), Ok(1));
    }

    #[test]
    fn lcm_overflow_is_logic_error() {
        let big = u64::MAX - 1;
        assert!(matches!(
            lcm(big, big - 1),
            Err(LogicError::PeriodOverflow { .. })
        ));
    }

    #[test]
    fn sentinel_mapping() {
        assert_eq!(Reachability::Presses(42).as_sentinel(), Ok(42));
        assert_eq!(Reachability::NotFound.as_sentinel(), Ok(-1));
        assert_eq!(Reachability::NotFound.presses(), None);
    }

    #[test]
    fn sentinel_rejects_counts_beyond_i64() {
        let big = i64::MAX as u64 + 1;
        assert_eq!(
            Reachability::Presses(big).as_sentinel(),
            Err(LogicError::SentinelOverflow(big))
        );
        assert_eq!(Reachability::Presses(big).presses(), Some(big));
        assert_eq!(Reachability::Presses(i64::MAX as u64).as_sentinel(), Ok(i64::MAX));
    }

    #[test]
    fn trivial_targets_answered_without_pressing() {
        let mut c = Circuit::build(SCENARIO_B.lines()).unwrap();
        let r = solve(&mut c, &SolveRequest::new("button").max_presses(0)).unwrap();
        assert_eq!(r, Reachability::Presses(0));
        let r = solve(&mut c, &SolveRequest::new("broadcaster").max_presses(0)).unwrap();
        assert_eq!(r, Reachability::Presses(1));
        assert_eq!(c.presses(), PressId(0));
    }

    #[test]
    fn unknown_target_is_config_error() {
        let mut c = Circuit::build(SCENARIO_B.lines()).unwrap();
        let err = solve(&mut c, &SolveRequest::new("rx")).unwrap_err();
        assert_eq!(err, PulseError::Config(ConfigError::UnknownModule("rx".into())));
    }

    #[test]
    fn watch_list_uses_second_order_sources() {
        let net: Network = SCENARIO_B.parse().unwrap();
        let output = net.id_of("output").unwrap();
        let watch = WatchList::build(&net, output, &SolveRequest::new("output")).unwrap();
        assert_eq!(watch.sources.len(), 1);
        assert_eq!(watch.sources[0].id, net.id_of("con").unwrap());
        assert_eq!(
            watch.sources[0].inputs,
            [net.id_of("a").unwrap(), net.id_of("b").unwrap()]
        );
    }
}
