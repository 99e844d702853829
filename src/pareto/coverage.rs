//! Frontier coverage metric.

use std::collections::HashSet;

use crate::candidate::ArchitectureCandidate;

/// Fraction of `true_frontier`'s distinct objective tuples that also
/// appear in `approx_frontier`. Computed over metric tuples rather than
/// object identity so that an approximate frontier built from a different
/// set of graph instances still scores coverage correctly.
///
/// An empty true frontier is vacuously fully covered (`1.0`).
pub fn frontier_coverage(
    approx_frontier: &[ArchitectureCandidate],
    true_frontier: &[ArchitectureCandidate],
) -> f64 {
    let true_metrics: HashSet<_> = true_frontier.iter().map(|c| c.metrics_key()).collect();

    if true_metrics.is_empty() {
        return 1.0;
    }

    let approx_metrics: HashSet<_> = approx_frontier.iter().map(|c| c.metrics_key()).collect();

    let intersection = true_metrics.intersection(&approx_metrics).count();
    intersection as f64 / true_metrics.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AgentGraph;

    fn cand(cost: f64, latency: f64, reliability: f64) -> ArchitectureCandidate {
        ArchitectureCandidate::new(AgentGraph::new(), cost, latency, reliability)
    }

    #[test]
    fn empty_true_frontier_is_fully_covered() {
        assert_eq!(frontier_coverage(&[], &[]), 1.0);
    }

    #[test]
    fn matching_metric_tuple_sets_yield_full_coverage() {
        let true_frontier = vec![cand(1.0, 1.0, 0.9), cand(2.0, 1.0, 0.8)];
        // Different graph instances, identical metric tuples.
        let approx_frontier = vec![cand(1.0, 1.0, 0.9), cand(2.0, 1.0, 0.8)];
        assert_eq!(frontier_coverage(&approx_frontier, &true_frontier), 1.0);
    }

    #[test]
    fn partial_overlap_is_fractional() {
        let true_frontier = vec![cand(1.0, 1.0, 0.9), cand(2.0, 1.0, 0.8)];
        let approx_frontier = vec![cand(1.0, 1.0, 0.9)];
        assert_eq!(frontier_coverage(&approx_frontier, &true_frontier), 0.5);
    }

    #[test]
    fn coverage_is_within_bounds() {
        let true_frontier = vec![cand(1.0, 1.0, 0.9)];
        let approx_frontier = vec![cand(5.0, 5.0, 0.1)];
        let coverage = frontier_coverage(&approx_frontier, &true_frontier);
        assert!((0.0..=1.0).contains(&coverage));
    }
}
