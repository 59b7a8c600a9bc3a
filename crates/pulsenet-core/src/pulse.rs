//! The binary pulse value and its per-kind tally.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A binary signal carried along one wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pulse {
    /// Low signal. The button only ever injects this.
    Low,
    /// High signal.
    High,
}

impl Pulse {
    /// `true` for [`Pulse::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// `true` for [`Pulse::Low`].
    #[inline]
    pub fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl From<bool> for Pulse {
    fn from(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Number of low and high pulses observed on some set of wires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PulseCounts {
    /// Low pulses counted.
    pub low: u64,
    /// High pulses counted.
    pub high: u64,
}

impl PulseCounts {
    /// All-zero tally.
    pub const ZERO: Self = Self { low: 0, high: 0 };

    /// Count one pulse of the given kind.
    #[inline]
    pub fn record(&mut self, pulse: Pulse) {
        match pulse {
            Pulse::Low => self.low += 1,
            Pulse::High => self.high += 1,
        }
    }

    /// Count for one pulse kind.
    #[inline]
    pub fn get(&self, pulse: Pulse) -> u64 {
        match pulse {
            Pulse::Low => self.low,
            Pulse::High => self.high,
        }
    }

    /// Low plus high, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.low.saturating_add(self.high)
    }

    /// Low times high, saturating at `u64::MAX`.
    ///
    /// Use [`checked_product`](Self::checked_product) to detect overflow.
    pub fn product(&self) -> u64 {
        self.low.saturating_mul(self.high)
    }

    /// Low times high, `None` on overflow.
    pub fn checked_product(&self) -> Option<u64> {
        self.low.checked_mul(self.high)
    }

    /// `true` if nothing has been counted.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for PulseCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            low: self.low + rhs.low,
            high: self.high + rhs.high,
        }
    }
}

impl AddAssign for PulseCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.low += rhs.low;
        self.high += rhs.high;
    }
}

impl Sub for PulseCounts {
    type Output = Self;

    /// Difference of two snapshots of the same monotonic tally.
    fn sub(self, rhs: Self) -> Self {
        Self {
            low: self.low - rhs.low,
            high: self.high - rhs.high,
        }
    }
}

impl std::iter::Sum for PulseCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for PulseCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} low / {} high", self.low, self.high)
    }
}
