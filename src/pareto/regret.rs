//! Additive and average regret against a reference (true) frontier.

use crate::candidate::ArchitectureCandidate;
use crate::pareto::dominance::dominates;

/// Per-objective regret triple: `(cost_regret, latency_regret, reliability_regret)`.
pub type Regret = (f64, f64, f64);

/// Minimum per-objective gap from `candidate` to its closest dominator in
/// `true_frontier`. `(0, 0, 0)` if no member of `true_frontier` dominates
/// `candidate` (this includes the case where `candidate` is itself on the
/// true frontier).
pub fn additive_regret(candidate: &ArchitectureCandidate, true_frontier: &[ArchitectureCandidate]) -> Regret {
    let dominators: Vec<&ArchitectureCandidate> = true_frontier
        .iter()
        .filter(|p| dominates(p, candidate))
        .collect();

    if dominators.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let cm = candidate.metrics();

    let cost_regret = dominators
        .iter()
        .map(|p| cm.cost - p.metrics().cost)
        .fold(f64::INFINITY, f64::min)
        .max(0.0);

    let latency_regret = dominators
        .iter()
        .map(|p| cm.latency - p.metrics().latency)
        .fold(f64::INFINITY, f64::min)
        .max(0.0);

    let reliability_regret = dominators
        .iter()
        .map(|p| p.metrics().reliability - cm.reliability)
        .fold(f64::INFINITY, f64::min)
        .max(0.0);

    (cost_regret, latency_regret, reliability_regret)
}

/// Component-wise mean of [`additive_regret`] across `approx_frontier`.
/// `(0, 0, 0)` for an empty approximate frontier.
pub fn average_regret(approx_frontier: &[ArchitectureCandidate], true_frontier: &[ArchitectureCandidate]) -> Regret {
    if approx_frontier.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let n = approx_frontier.len() as f64;
    let (mut total_cost, mut total_latency, mut total_reliability) = (0.0, 0.0, 0.0);

    for candidate in approx_frontier {
        let (cr, lr, rr) = additive_regret(candidate, true_frontier);
        total_cost += cr;
        total_latency += lr;
        total_reliability += rr;
    }

    (total_cost / n, total_latency / n, total_reliability / n)
}
