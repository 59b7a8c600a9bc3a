//! Counter-bank generator and depth-first reference press.
//!
//! A counter bank is a set of binary counters, one per period. Each
//! counter is a chain of flip-flops whose set bits feed a conjunction; when
//! the count reaches the period the conjunction fires low, resets the
//! counter to zero and pulses an inverter high. All inverters of a bank
//! feed one gate conjunction, so the gate first sends low after
//! `lcm(periods)` presses. Periods must be odd so the reset lands on zero.

use pulsenet_core::{LogicError, ModuleId, Origin, Pulse};
use pulsenet_network::Network;

/// One gate and the counters feeding it.
#[derive(Clone, Debug)]
pub struct CounterBank<'a> {
    /// Prefix for every generated id in this bank.
    pub prefix: &'a str,
    /// Name of the gate conjunction the inverters feed.
    pub gate: &'a str,
    /// One counter per period.
    pub periods: &'a [u64],
}

/// Lines for one bank, plus the head flip-flop of each counter.
///
/// The gate is wired to `target`.
pub fn counter_bank(bank: &CounterBank<'_>, target: &str) -> (Vec<String>, Vec<String>) {
    let mut heads = Vec::new();
    let mut lines = Vec::new();

    for (j, &period) in bank.periods.iter().enumerate() {
        assert!(period % 2 == 1, "counter periods must be odd, got {period}");
        let tag = format!("{}{}", bank.prefix, (b'a' + j as u8) as char);
        let bits = 64 - period.leading_zeros() as usize;
        let conj = format!("c{tag}");
        let inverter = format!("i{tag}");
        let flops: Vec<String> = (0..bits).map(|i| format!("{tag}{i}")).collect();
        let bit_set = |i: usize| (period >> i) & 1 == 1;

        for (i, flop) in flops.iter().enumerate() {
            let mut dests = Vec::new();
            if let Some(next) = flops.get(i + 1) {
                dests.push(next.clone());
            }
            if bit_set(i) {
                dests.push(conj.clone());
            }
            lines.push(format!("%{flop} -> {}", dests.join(", ")));
        }

        let mut conj_dests: Vec<String> = (0..bits)
            .filter(|&i| !bit_set(i))
            .map(|i| flops[i].clone())
            .collect();
        if !conj_dests.contains(&flops[0]) {
            conj_dests.insert(0, flops[0].clone());
        }
        conj_dests.push(inverter.clone());
        lines.push(format!("&{conj} -> {}", conj_dests.join(", ")));
        lines.push(format!("&{inverter} -> {}", bank.gate));
        heads.push(flops[0].clone());
    }

    lines.push(format!("&{} -> {target}", bank.gate));
    (heads, lines)
}

/// Full network text: a broadcaster feeding every counter of every bank,
/// each bank's gate wired to `target`.
pub fn counter_network(banks: &[CounterBank<'_>], target: &str) -> String {
    let mut heads = Vec::new();
    let mut body = Vec::new();
    for bank in banks {
        let (h, l) = counter_bank(bank, target);
        heads.extend(h);
        body.extend(l);
    }
    let mut out = format!("broadcaster -> {}\n", heads.join(", "));
    for line in body {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Press the button once, delivering pulses depth-first.
///
/// Each emitted pulse is processed immediately and recursively before the
/// next destination is sent to. This is the wrong order; it exists so
/// tests can show the engine's breadth-first order gives different counts.
pub fn depth_first_press(network: &mut Network) -> Result<(), LogicError> {
    let b = network.broadcaster();
    network.record(Origin::Button, b, Pulse::Low)?;
    visit(network, Origin::Button, b, Pulse::Low)
}

fn visit(network: &mut Network, from: Origin, to: ModuleId, pulse: Pulse) -> Result<(), LogicError> {
    let Some(out) = network.deliver(to, from, pulse)? else {
        return Ok(());
    };
    let dests: Vec<ModuleId> = network
        .module(to)
        .map(|m| m.destinations().to_vec())
        .ok_or(LogicError::DanglingHandle(to))?;
    for d in dests {
        network.record(Origin::Module(to), d, out)?;
        visit(network, Origin::Module(to), d, out)?;
    }
    Ok(())
}
