//! Shared scalar scoring function used by the heuristic and beam synthesizers,
//! and by the evaluation harness to pick one candidate from a frontier.

use crate::candidate::Metrics;
use crate::registry::ComponentMetadata;
use crate::task::ObjectiveWeights;

/// `w.cost * cost_per_call + w.latency * avg_latency_ms - w.error * reliability_score`.
/// Lower is better.
pub fn score(meta: &ComponentMetadata, weights: &ObjectiveWeights) -> f64 {
    score_metrics(
        Metrics {
            cost: meta.cost_per_call,
            latency: meta.avg_latency_ms,
            reliability: meta.reliability_score,
        },
        weights,
    )
}

/// Same scoring function applied to an aggregate metric triple rather than
/// a single component's declared metadata; used to rank whole candidates.
pub fn score_metrics(metrics: Metrics, weights: &ObjectiveWeights) -> f64 {
    weights.cost * metrics.cost + weights.latency * metrics.latency
        - weights.error * metrics.reliability
}
