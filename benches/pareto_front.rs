//! Pareto front computation benchmarks.
//!
//! Measures how `compute_pareto_front` scales with population size across
//! populations with varying degrees of mutual dominance.

use agent_synth::{compute_pareto_front, AgentGraph, ArchitectureCandidate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn candidate(cost: f64, latency: f64, reliability: f64) -> ArchitectureCandidate {
    ArchitectureCandidate::new(AgentGraph::new(), cost, latency, reliability)
}

/// A population where roughly half the candidates are dominated, so the
/// front computation does real pruning work rather than trivially keeping
/// everything.
fn mixed_population(n: usize) -> Vec<ArchitectureCandidate> {
    (0..n)
        .map(|i| {
            let cost = (i % 50) as f64;
            let latency = ((i * 7) % 50) as f64;
            let reliability = 0.5 + ((i * 13) % 50) as f64 / 100.0;
            candidate(cost, latency, reliability)
        })
        .collect()
}

fn benchmark_pareto_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_pareto_front");

    for size in [10usize, 100, 500, 1_000] {
        let population = mixed_population(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &population, |b, pop| {
            b.iter(|| black_box(compute_pareto_front(pop)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pareto_front);
criterion_main!(benches);
