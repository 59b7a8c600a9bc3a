//! Criterion benchmarks for the reachability solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pulsenet_bench::reference_circuit;

/// Benchmark: full solve on the reference network (reset included).
fn bench_reference_solve(c: &mut Criterion) {
    let mut circuit = reference_circuit();
    c.bench_function("reference_solve", |b| {
        b.iter(|| {
            let r = circuit
                .presses_needed_for_low_pulse("rx", 1, 5000)
                .unwrap();
            black_box(r);
        });
    });
}

criterion_group!(benches, bench_reference_solve);
criterion_main!(benches);
