//! Approximation-quality report combining the individual Pareto metrics.

use std::collections::HashMap;

use crate::candidate::ArchitectureCandidate;
use crate::pareto::{
    average_regret, frontier_coverage, hypervolume_loss, ReferencePoint,
    APPROXIMATION_HYPERVOLUME_SAMPLES, APPROXIMATION_SEED,
};

/// Combines coverage, hypervolume loss, and regret into a single report
/// comparing an approximate frontier against a ground-truth one.
///
/// Keys: `coverage`, `hypervolume_loss`, `avg_cost_regret`,
/// `avg_latency_regret`, `avg_reliability_regret`.
pub fn evaluate_approximation(
    approx_frontier: &[ArchitectureCandidate],
    true_frontier: &[ArchitectureCandidate],
    reference_point: ReferencePoint,
) -> HashMap<String, f64> {
    let coverage = frontier_coverage(approx_frontier, true_frontier);
    let loss = hypervolume_loss(
        approx_frontier,
        true_frontier,
        reference_point,
        APPROXIMATION_HYPERVOLUME_SAMPLES,
        APPROXIMATION_SEED,
    );
    let (cost_regret, latency_regret, reliability_regret) =
        average_regret(approx_frontier, true_frontier);

    let mut report = HashMap::with_capacity(5);
    report.insert("coverage".to_string(), coverage);
    report.insert("hypervolume_loss".to_string(), loss);
    report.insert("avg_cost_regret".to_string(), cost_regret);
    report.insert("avg_latency_regret".to_string(), latency_regret);
    report.insert("avg_reliability_regret".to_string(), reliability_regret);
    report
}
