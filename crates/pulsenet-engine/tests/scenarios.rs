//! Integration tests: pulse counts on the canonical networks and the
//! breadth-first ordering law.

use pulsenet_core::{PressId, PulseCounts};
use pulsenet_engine::Circuit;
use pulsenet_network::Network;
use pulsenet_test_utils::{depth_first_press, SCENARIO_A, SCENARIO_B};

// ── Scenario A ──────────────────────────────────────────────────

#[test]
fn scenario_a_one_press() {
    let mut c = Circuit::build(SCENARIO_A.lines()).unwrap();
    c.push_button(1).unwrap();
    assert_eq!(c.low_pulse_count(), 8);
    assert_eq!(c.high_pulse_count(), 4);
}

#[test]
fn scenario_a_thousand_presses() {
    let mut c = Circuit::build(SCENARIO_A.lines()).unwrap();
    c.push_button(1000).unwrap();
    assert_eq!(c.low_pulse_count(), 8000);
    assert_eq!(c.high_pulse_count(), 4000);
    assert_eq!(c.pulse_product(), 32_000_000);
    assert_eq!(c.presses(), PressId(1000));
}

// ── Scenario B ──────────────────────────────────────────────────

#[test]
fn scenario_b_thousand_presses() {
    let mut c = Circuit::build(SCENARIO_B.lines()).unwrap();
    c.push_button(1000).unwrap();
    assert_eq!(c.low_pulse_count(), 4250);
    assert_eq!(c.high_pulse_count(), 2750);
    assert_eq!(c.pulse_product(), 11_687_500);
}

#[test]
fn push_button_in_batches_matches_single_batch() {
    let mut batched = Circuit::build(SCENARIO_B.lines()).unwrap();
    for _ in 0..10 {
        batched.push_button(100).unwrap();
    }
    let mut single = Circuit::build(SCENARIO_B.lines()).unwrap();
    single.push_button(1000).unwrap();
    assert_eq!(batched.totals(), single.totals());
    assert_eq!(batched.fingerprint(), single.fingerprint());
}

// ── Ordering law ────────────────────────────────────────────────

#[test]
fn depth_first_delivery_gives_different_counts() {
    let mut dfs: Network = SCENARIO_B.parse().unwrap();
    for _ in 0..1000 {
        depth_first_press(&mut dfs).unwrap();
    }
    assert_eq!(dfs.totals(), PulseCounts { low: 4000, high: 3000 });

    let mut c = Circuit::build(SCENARIO_B.lines()).unwrap();
    c.push_button(1000).unwrap();
    assert_ne!(c.totals(), dfs.totals());
}

#[test]
fn conjunction_sees_inputs_in_generation_order() {
    // On press 1 the high from `a` reaches `con` two generations before
    // the high from `b`, so `con` emits high, then low.
    let mut c = Circuit::build(SCENARIO_B.lines()).unwrap();
    c.push_button(1).unwrap();
    let output = c.network().get("output").unwrap();
    assert_eq!(output.received(), PulseCounts { low: 1, high: 1 });
}

#[test]
fn per_press_metrics_sum_to_totals() {
    let mut c = Circuit::build(SCENARIO_B.lines()).unwrap();
    let mut summed = PulseCounts::ZERO;
    for _ in 0..50 {
        let m = c.press_once().unwrap();
        assert_eq!(m.deliveries, m.pulses.total());
        assert!(m.max_queue_depth >= 1);
        summed += m.pulses;
    }
    assert_eq!(summed, c.totals());
}
