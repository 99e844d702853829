//! Monte Carlo hypervolume estimation and hypervolume loss.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::candidate::ArchitectureCandidate;

/// Worst-tolerable `(cost, latency, reliability)` triple defining the
/// sampling box for Monte Carlo hypervolume estimation.
pub type ReferencePoint = (f64, f64, f64);

const DEFAULT_SAMPLES: usize = 10_000;
const APPROXIMATION_SAMPLES: usize = 200_000;
const DEFAULT_SEED: u64 = 42;

fn sample_box(rng: &mut StdRng, reference_point: ReferencePoint) -> (f64, f64, f64) {
    let (ref_cost, ref_latency, ref_reliability) = reference_point;
    (
        rng.gen_range(0.0..ref_cost),
        rng.gen_range(0.0..ref_latency),
        rng.gen_range(ref_reliability..1.0),
    )
}

fn is_dominated_by_frontier(
    frontier: &[ArchitectureCandidate],
    sample: (f64, f64, f64),
) -> bool {
    let (cost, latency, reliability) = sample;
    frontier.iter().any(|c| {
        let m = c.metrics();
        m.cost <= cost && m.latency <= latency && m.reliability >= reliability
    })
}

/// Monte Carlo estimate of the hypervolume dominated by `frontier`
/// relative to `reference_point`, using `num_samples` uniform draws from a
/// generator seeded with `seed`.
pub fn hypervolume_monte_carlo(
    frontier: &[ArchitectureCandidate],
    reference_point: ReferencePoint,
    num_samples: usize,
    seed: u64,
) -> f64 {
    if frontier.is_empty() {
        return 0.0;
    }

    let (ref_cost, ref_latency, ref_reliability) = reference_point;
    let mut rng = StdRng::seed_from_u64(seed);

    let dominated_count = (0..num_samples)
        .filter(|_| is_dominated_by_frontier(frontier, sample_box(&mut rng, reference_point)))
        .count();

    let box_volume = ref_cost * ref_latency * (1.0 - ref_reliability);
    (dominated_count as f64 / num_samples as f64) * box_volume
}

/// Convenience wrapper using the default sample count (`10_000`) and seed.
pub fn hypervolume(frontier: &[ArchitectureCandidate], reference_point: ReferencePoint) -> f64 {
    hypervolume_monte_carlo(frontier, reference_point, DEFAULT_SAMPLES, DEFAULT_SEED)
}

/// `max(0, hv_true - hv_approx)`, estimated from two independent frontier
/// checks against the *same* sequence of samples drawn from one generator
/// (common random numbers), so that per-sample noise cancels rather than
/// compounding across the two passes.
pub fn hypervolume_loss(
    approx_frontier: &[ArchitectureCandidate],
    true_frontier: &[ArchitectureCandidate],
    reference_point: ReferencePoint,
    num_samples: usize,
    seed: u64,
) -> f64 {
    let (ref_cost, ref_latency, ref_reliability) = reference_point;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut dominated_true = 0usize;
    let mut dominated_approx = 0usize;

    for _ in 0..num_samples {
        let sample = sample_box(&mut rng, reference_point);

        if is_dominated_by_frontier(true_frontier, sample) {
            dominated_true += 1;
        }
        if is_dominated_by_frontier(approx_frontier, sample) {
            dominated_approx += 1;
        }
    }

    let box_volume = ref_cost * ref_latency * (1.0 - ref_reliability);
    let hv_true = (dominated_true as f64 / num_samples as f64) * box_volume;
    let hv_approx = (dominated_approx as f64 / num_samples as f64) * box_volume;

    (hv_true - hv_approx).max(0.0)
}

/// Default sample count used by [`hypervolume_loss`] in the approximation
/// metrics report (`200_000`, larger than the single-frontier default
/// since two passes share the noise).
pub const APPROXIMATION_HYPERVOLUME_SAMPLES: usize = APPROXIMATION_SAMPLES;

/// Seed used by the approximation metrics report's hypervolume loss pass.
pub const APPROXIMATION_SEED: u64 = DEFAULT_SEED;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AgentGraph;

    fn cand(cost: f64, latency: f64, reliability: f64) -> ArchitectureCandidate {
        ArchitectureCandidate::new(AgentGraph::new(), cost, latency, reliability)
    }

    #[test]
    fn empty_frontier_has_zero_hypervolume() {
        assert_eq!(hypervolume(&[], (10.0, 10.0, 0.0)), 0.0);
    }

    #[test]
    fn dominant_frontier_has_larger_hypervolume() {
        let weak = vec![cand(8.0, 8.0, 0.2)];
        let strong = vec![cand(1.0, 1.0, 0.99)];
        let reference_point = (10.0, 10.0, 0.0);

        let hv_weak = hypervolume_monte_carlo(&weak, reference_point, 5_000, 7);
        let hv_strong = hypervolume_monte_carlo(&strong, reference_point, 5_000, 7);

        assert!(hv_strong > hv_weak);
    }

    #[test]
    fn loss_is_non_negative_and_zero_for_identical_frontiers() {
        let frontier = vec![cand(1.0, 1.0, 0.9), cand(2.0, 0.5, 0.95)];
        let reference_point = (10.0, 10.0, 0.0);

        let loss = hypervolume_loss(&frontier, &frontier, reference_point, 2_000, 42);
        assert_eq!(loss, 0.0);
    }

    #[test]
    fn loss_is_non_negative_for_a_weaker_approximation() {
        let true_frontier = vec![cand(1.0, 1.0, 0.99)];
        let approx_frontier = vec![cand(5.0, 5.0, 0.5)];
        let reference_point = (10.0, 10.0, 0.0);

        let loss = hypervolume_loss(&approx_frontier, &true_frontier, reference_point, 5_000, 42);
        assert!(loss >= 0.0);
    }

    #[test]
    fn same_seed_yields_deterministic_estimate() {
        let frontier = vec![cand(1.0, 1.0, 0.9)];
        let reference_point = (10.0, 10.0, 0.0);
        let a = hypervolume_monte_carlo(&frontier, reference_point, 1_000, 123);
        let b = hypervolume_monte_carlo(&frontier, reference_point, 1_000, 123);
        assert_eq!(a, b);
    }
}
