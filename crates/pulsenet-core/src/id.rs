//! Strongly-typed identifiers and the [`ModuleList`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Handle of a module inside a network's arena.
///
/// Modules are registered during assembly and assigned sequential handles.
/// `ModuleId(n)` is the n-th module in declaration order; implicit sinks
/// follow every declared module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub u32);

impl ModuleId {
    /// Arena slot for this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ModuleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing button-press counter.
///
/// Incremented each time the button is pressed and the resulting
/// propagation reaches quiescence. `PressId(0)` means "nothing pressed yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PressId(pub u64);

impl PressId {
    /// The press that follows this one.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PressId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Logical send timestamp of a pulse.
///
/// Not wall-clock: a sequence number assigned at send time, used only to
/// establish delivery order. Strictly increasing across one network's
/// lifetime until the next reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PulseSeq(pub u64);

impl fmt::Display for PulseSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who sent a pulse.
///
/// The button is not part of the network arena, so it gets its own case
/// rather than a reserved handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The external button that starts every press.
    Button,
    /// A module inside the network.
    Module(ModuleId),
}

impl Origin {
    /// The sending module's handle, or `None` for the button.
    #[inline]
    pub fn module(self) -> Option<ModuleId> {
        match self {
            Self::Button => None,
            Self::Module(id) => Some(id),
        }
    }
}

impl From<ModuleId> for Origin {
    fn from(id: ModuleId) -> Self {
        Self::Module(id)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button => write!(f, "button"),
            Self::Module(id) => write!(f, "{id}"),
        }
    }
}

/// A list of wired module handles.
///
/// Uses `SmallVec<[ModuleId; 4]>` to avoid heap allocation for the
/// typical fan-out and fan-in of a module. Wider modules spill to the heap
/// transparently.
pub type ModuleList = SmallVec<[ModuleId; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_id_index_matches_raw_value() {
        assert_eq!(ModuleId(7).index(), 7);
        assert_eq!(ModuleId::from(3), ModuleId(3));
    }

    #[test]
    fn press_id_next_increments() {
        assert_eq!(PressId(0).next(), PressId(1));
        assert_eq!(PressId::default(), PressId(0));
    }

    #[test]
    fn origin_module_handle() {
        assert_eq!(Origin::Button.module(), None);
        assert_eq!(Origin::from(ModuleId(2)).module(), Some(ModuleId(2)));
    }

    #[test]
    fn display_formats() {
        assert_eq!(ModuleId(4).to_string(), "#4");
        assert_eq!(PressId(12).to_string(), "12");
        assert_eq!(PulseSeq(9).to_string(), "9");
        assert_eq!(Origin::Button.to_string(), "button");
    }
}
