//! Integration tests for the reachability solver on generated
//! counter-bank networks, whose answers are known in closed form.

use pulsenet_core::{LogicError, PressId, PulseError};
use pulsenet_engine::{solve, Circuit, Reachability, SolveRequest};
use pulsenet_test_utils::{counter_network, CounterBank, SCENARIO_B};

fn single_bank(periods: &[u64]) -> Circuit {
    let text = counter_network(
        &[CounterBank {
            prefix: "",
            gate: "gate",
            periods,
        }],
        "rx",
    );
    Circuit::build(text.lines()).unwrap()
}

fn two_banks() -> Circuit {
    let text = counter_network(
        &[
            CounterBank {
                prefix: "x",
                gate: "g",
                periods: &[3, 5],
            },
            CounterBank {
                prefix: "y",
                gate: "h",
                periods: &[7],
            },
        ],
        "rx",
    );
    Circuit::build(text.lines()).unwrap()
}

#[test]
fn lcm_of_two_counters() {
    let mut c = single_bank(&[3, 5]);
    let r = c.presses_needed_for_low_pulse("rx", 1, 100).unwrap();
    assert_eq!(r, Reachability::Presses(15));
    // Only the longest period had to be simulated.
    assert_eq!(c.presses(), PressId(5));
}

#[test]
fn answer_matches_brute_force_on_small_bank() {
    let mut c = single_bank(&[3, 5]);
    let mut first_low = None;
    for _ in 0..100 {
        let m = c.press_once().unwrap();
        if c.network().get("rx").unwrap().received().low > 0 {
            first_low = Some(m.press.0);
            break;
        }
    }
    assert_eq!(first_low, Some(15));
    let r = c.presses_needed_for_low_pulse("rx", 1, 100).unwrap();
    assert_eq!(r.presses(), first_low);
}

#[test]
fn three_counters_beyond_the_press_bound() {
    let mut c = single_bank(&[11, 13, 15]);
    let r = c.presses_needed_for_low_pulse("rx", 1, 100).unwrap();
    assert_eq!(r, Reachability::Presses(2145));
    assert_eq!(c.presses(), PressId(15));
}

#[test]
fn bound_exhausted_returns_not_found() {
    let mut c = single_bank(&[3, 5]);
    let r = c.presses_needed_for_low_pulse("rx", 1, 4).unwrap();
    assert_eq!(r, Reachability::NotFound);
    assert_eq!(r.as_sentinel(), Ok(-1));
    assert_eq!(c.presses(), PressId(4));
}

#[test]
fn first_resolved_source_wins_for_one_required() {
    // Gate `g` resolves at press 5 (period 15) before `h` at press 7.
    let mut c = two_banks();
    let r = c.presses_needed_for_low_pulse("rx", 1, 1000).unwrap();
    assert_eq!(r, Reachability::Presses(15));
}

#[test]
fn two_required_sources_combine() {
    let mut c = two_banks();
    let r = c.presses_needed_for_low_pulse("rx", 2, 1000).unwrap();
    assert_eq!(r, Reachability::Presses(105));
    let r = c.presses_needed_for_low_pulse("rx", 2, 6).unwrap();
    assert_eq!(r, Reachability::NotFound);
    let r = c.presses_needed_for_low_pulse("rx", 2, 7).unwrap();
    assert_eq!(r, Reachability::Presses(105));
}

#[test]
fn more_required_than_available_is_logic_error() {
    let mut c = single_bank(&[3, 5]);
    let err = c.presses_needed_for_low_pulse("rx", 2, 100).unwrap_err();
    assert_eq!(
        err,
        PulseError::Logic(LogicError::InsufficientSources {
            target: "rx".into(),
            required: 2,
            available: 1,
        })
    );
}

#[test]
fn scenario_b_targets() {
    let mut c = Circuit::build(SCENARIO_B.lines()).unwrap();
    let ask = |c: &mut Circuit, target: &str, required: usize| {
        c.presses_needed_for_low_pulse(target, required, 10)
            .unwrap()
            .as_sentinel()
            .unwrap()
    };
    assert_eq!(ask(&mut c, "output", 1), 1);
    assert_eq!(ask(&mut c, "con", 1), 2);
    assert_eq!(ask(&mut c, "con", 2), -1);
    assert_eq!(ask(&mut c, "b", 1), 1);
    assert_eq!(ask(&mut c, "inv", 1), -1);
    // The broadcaster has no inputs, so `a` resolves vacuously.
    assert_eq!(ask(&mut c, "a", 1), 1);
}

#[test]
fn solver_resets_before_running() {
    let mut c = single_bank(&[3, 5]);
    c.push_button(37).unwrap();
    let r = solve(&mut c, &SolveRequest::new("rx").max_presses(100)).unwrap();
    assert_eq!(r, Reachability::Presses(15));
    assert_eq!(c.presses(), PressId(5));
}

#[test]
fn repeated_solves_are_deterministic() {
    let mut c = two_banks();
    let first = c.presses_needed_for_low_pulse("rx", 2, 1000).unwrap();
    let state = c.fingerprint();
    let second = c.presses_needed_for_low_pulse("rx", 2, 1000).unwrap();
    assert_eq!(first, second);
    assert_eq!(c.fingerprint(), state);
}
