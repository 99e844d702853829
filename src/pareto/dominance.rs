//! Dominance relation and batch Pareto front extraction.

use crate::candidate::ArchitectureCandidate;

/// `true` iff `a` dominates `b`: `a` is no worse than `b` on every
/// objective (cost/latency minimized, reliability maximized) and strictly
/// better on at least one. Irreflexive, antisymmetric and transitive — a
/// strict partial order.
pub fn dominates(a: &ArchitectureCandidate, b: &ArchitectureCandidate) -> bool {
    let (am, bm) = (a.metrics(), b.metrics());

    let better_or_equal_all =
        am.cost <= bm.cost && am.latency <= bm.latency && am.reliability >= bm.reliability;

    let strictly_better_at_least_one =
        am.cost < bm.cost || am.latency < bm.latency || am.reliability > bm.reliability;

    better_or_equal_all && strictly_better_at_least_one
}

/// Exact `O(n^2)` Pareto front: every candidate not dominated by any other
/// candidate in `candidates` (excluding self-comparison).
pub fn compute_pareto_front(candidates: &[ArchitectureCandidate]) -> Vec<ArchitectureCandidate> {
    let mut front = Vec::new();

    for candidate in candidates {
        let dominated = candidates
            .iter()
            .any(|other| !other.is_same_as(candidate) && dominates(other, candidate));

        if !dominated {
            front.push(candidate.clone());
        }
    }

    front
}
