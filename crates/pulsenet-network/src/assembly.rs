//! Two-pass network assembly from the textual description.
//!
//! Each non-blank line declares one module:
//!
//! ```text
//! broadcaster -> a, b
//! %a -> con
//! &con -> output
//! ```
//!
//! Destinations may name modules declared on later lines, so assembly
//! first registers every declaration and only then resolves wiring.
//! Destinations that are never declared become [`ModuleKind::Sink`]s.

use std::str::FromStr;

use indexmap::map::Entry;
use indexmap::IndexMap;
use pulsenet_core::{ConfigError, ModuleId, ModuleList};
use smallvec::SmallVec;

use crate::module::{Module, ModuleKind};
use crate::network::{Network, BROADCASTER, BUTTON};

/// Variant named by a declaration's prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclaredKind {
    /// The bare `broadcaster` id.
    Broadcaster,
    /// `%` prefix.
    FlipFlop,
    /// `&` prefix.
    Conjunction,
}

impl DeclaredKind {
    fn initial_state(self) -> ModuleKind {
        match self {
            Self::Broadcaster => ModuleKind::Broadcaster,
            Self::FlipFlop => ModuleKind::FlipFlop { on: false },
            Self::Conjunction => ModuleKind::Conjunction {
                memory: SmallVec::new(),
            },
        }
    }
}

/// One parsed declaration line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// 1-based source line.
    pub line: usize,
    /// Variant.
    pub kind: DeclaredKind,
    /// Module id without its prefix.
    pub name: String,
    /// Destination ids in wiring order.
    pub destinations: Vec<String>,
}

fn check_reserved(name: &str) -> Result<(), ConfigError> {
    if name == BUTTON {
        return Err(ConfigError::ReservedId(name.to_string()));
    }
    Ok(())
}

/// Ids are non-empty and free of whitespace.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(char::is_whitespace)
}

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Declaration>, ConfigError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let malformed = || ConfigError::MalformedLine {
        line,
        text: trimmed.to_string(),
    };

    let (lhs, rhs) = trimmed.split_once("->").ok_or_else(malformed)?;
    if rhs.contains("->") {
        return Err(malformed());
    }
    let lhs = lhs.trim();

    let (kind, name) = if lhs == BROADCASTER {
        (DeclaredKind::Broadcaster, lhs)
    } else if let Some(rest) = lhs.strip_prefix('%') {
        (DeclaredKind::FlipFlop, rest)
    } else if let Some(rest) = lhs.strip_prefix('&') {
        (DeclaredKind::Conjunction, rest)
    } else if lhs.is_empty() {
        return Err(malformed());
    } else {
        return Err(ConfigError::UnknownPrefix {
            line,
            declaration: lhs.to_string(),
        });
    };

    if !is_valid_id(name) {
        return Err(malformed());
    }
    if kind != DeclaredKind::Broadcaster && name == BROADCASTER {
        return Err(ConfigError::ReservedId(name.to_string()));
    }
    check_reserved(name)?;

    let destinations = rhs
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| {
            if !is_valid_id(d) {
                return Err(malformed());
            }
            check_reserved(d).map(|()| d.to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Declaration {
        line,
        kind,
        name: name.to_string(),
        destinations,
    }))
}

impl Network {
    /// Parse and assemble a network from description lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut declarations = Vec::new();
        for (i, text) in lines.into_iter().enumerate() {
            if let Some(decl) = parse_line(i + 1, text.as_ref())? {
                declarations.push(decl);
            }
        }
        Self::from_declarations(declarations)
    }

    /// Assemble a network from already-parsed declarations.
    pub fn from_declarations(declarations: Vec<Declaration>) -> Result<Self, ConfigError> {
        let mut modules: Vec<Module> = Vec::with_capacity(declarations.len());
        let mut names: IndexMap<String, ModuleId> = IndexMap::with_capacity(declarations.len());
        let mut broadcaster = None;

        // Pass 1: register every declared module.
        for decl in &declarations {
            let id = ModuleId(modules.len() as u32);
            match names.entry(decl.name.clone()) {
                Entry::Occupied(_) => return Err(ConfigError::DuplicateModule(decl.name.clone())),
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            if decl.kind == DeclaredKind::Broadcaster {
                broadcaster = Some(id);
            }
            modules.push(Module::new(decl.name.clone(), decl.kind.initial_state()));
        }
        let broadcaster = broadcaster.ok_or(ConfigError::MissingBroadcaster)?;
        let declared = modules.len();

        // Pass 2: resolve destinations, creating sinks for undeclared ids.
        for (i, decl) in declarations.iter().enumerate() {
            let mut wired = ModuleList::with_capacity(decl.destinations.len());
            for dest in &decl.destinations {
                let id = match names.get(dest) {
                    Some(&id) => id,
                    None => {
                        let id = ModuleId(modules.len() as u32);
                        names.insert(dest.clone(), id);
                        modules.push(Module::new(dest.clone(), ModuleKind::Sink));
                        id
                    }
                };
                wired.push(id);
            }
            modules[i].set_destinations(wired);
        }

        // Pass 3: back-fill sources from the reverse wiring.
        let edges: Vec<(ModuleId, ModuleId)> = modules
            .iter()
            .enumerate()
            .flat_map(|(i, m)| {
                m.destinations()
                    .iter()
                    .map(move |&to| (ModuleId(i as u32), to))
            })
            .collect();
        for (from, to) in edges {
            modules[to.index()].add_source(from);
        }

        tracing::debug!(
            declared,
            sinks = modules.len() - declared,
            wires = modules.iter().map(|m| m.destinations().len()).sum::<usize>(),
            "assembled network"
        );

        Ok(Network::from_parts(modules, names, broadcaster))
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsenet_core::Pulse;
    use pulsenet_test_utils::{SCENARIO_A, SCENARIO_B};

    #[test]
    fn parse_each_prefix() {
        let d = parse_line(1, "broadcaster -> a, b").unwrap().unwrap();
        assert_eq!(d.kind, DeclaredKind::Broadcaster);
        assert_eq!(d.destinations, ["a", "b"]);

        let d = parse_line(2, "  %a -> b  ").unwrap().unwrap();
        assert_eq!((d.kind, d.name.as_str()), (DeclaredKind::FlipFlop, "a"));

        let d = parse_line(3, "&inv -> a").unwrap().unwrap();
        assert_eq!((d.kind, d.name.as_str()), (DeclaredKind::Conjunction, "inv"));
    }

    #[test]
    fn blank_line_is_skipped() {
        assert_eq!(parse_line(1, "   "), Ok(None));
    }

    #[test]
    fn empty_destination_list_is_legal() {
        let d = parse_line(1, "%a ->").unwrap().unwrap();
        assert!(d.destinations.is_empty());
    }

    #[test]
    fn chained_arrows_rejected() {
        assert_eq!(
            parse_line(1, "broadcaster -> a -> b"),
            Err(ConfigError::MalformedLine {
                line: 1,
                text: "broadcaster -> a -> b".to_string(),
            })
        );
        let err = "broadcaster -> a -> b\n%a -> b".parse::<Network>().unwrap_err();
        assert!(matches!(err, ConfigError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn whitespace_inside_ids_rejected() {
        assert_eq!(
            parse_line(2, "% a -> b"),
            Err(ConfigError::MalformedLine {
                line: 2,
                text: "% a -> b".to_string(),
            })
        );
        assert!(matches!(
            parse_line(3, "%a -> b c, d"),
            Err(ConfigError::MalformedLine { line: 3, .. })
        ));
        assert!(matches!(
            "broadcaster -> a\n% a -> b".parse::<Network>(),
            Err(ConfigError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn unknown_prefix_rejected() {
        assert_eq!(
            parse_line(4, "#x -> a"),
            Err(ConfigError::UnknownPrefix {
                line: 4,
                declaration: "#x".into()
            })
        );
        assert!(matches!(
            parse_line(1, "a -> b"),
            Err(ConfigError::UnknownPrefix { .. })
        ));
    }

    #[test]
    fn malformed_lines_rejected() {
        assert!(matches!(
            parse_line(2, "%a b"),
            Err(ConfigError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            parse_line(1, "% -> b"),
            Err(ConfigError::MalformedLine { .. })
        ));
        assert!(matches!(
            parse_line(1, "-> b"),
            Err(ConfigError::MalformedLine { .. })
        ));
    }

    #[test]
    fn reserved_ids_rejected() {
        assert_eq!(
            parse_line(1, "%button -> a"),
            Err(ConfigError::ReservedId("button".into()))
        );
        assert_eq!(
            parse_line(1, "&a -> button"),
            Err(ConfigError::ReservedId("button".into()))
        );
        assert_eq!(
            parse_line(1, "%broadcaster -> a"),
            Err(ConfigError::ReservedId("broadcaster".into()))
        );
    }

    #[test]
    fn duplicate_module_rejected() {
        let err = "broadcaster -> a\n%a -> b\n&a -> b"
            .parse::<Network>()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateModule("a".into()));
    }

    #[test]
    fn missing_broadcaster_rejected() {
        let err = "%a -> b".parse::<Network>().unwrap_err();
        assert_eq!(err, ConfigError::MissingBroadcaster);
    }

    #[test]
    fn forward_references_resolve() {
        let net: Network = SCENARIO_A.parse().unwrap();
        let inv = net.get("inv").unwrap();
        assert!(matches!(inv.kind(), ModuleKind::Conjunction { .. }));
        let c = net.id_of("c").unwrap();
        assert_eq!(inv.sources(), &[c]);
        assert_eq!(inv.remembered(c), Some(Pulse::Low));
    }

    #[test]
    fn undeclared_destination_becomes_sink() {
        let net: Network = SCENARIO_B.parse().unwrap();
        let output = net.get("output").unwrap();
        assert_eq!(output.kind(), &ModuleKind::Sink);
        assert!(output.destinations().is_empty());
        assert_eq!(output.sources(), &[net.id_of("con").unwrap()]);
        // Sinks come after every declared module.
        assert_eq!(net.id_of("output").unwrap(), ModuleId(5));
    }

    #[test]
    fn sources_are_reverse_of_destinations() {
        let net: Network = SCENARIO_B.parse().unwrap();
        let con = net.get("con").unwrap();
        let expected = [net.id_of("a").unwrap(), net.id_of("b").unwrap()];
        assert_eq!(con.sources(), &expected);
        for (id, m) in net.iter() {
            for &src in m.sources() {
                assert!(net.module(src).unwrap().destinations().contains(&id));
            }
        }
    }
}
