//! Dominance-rank layering.

use crate::candidate::ArchitectureCandidate;
use crate::pareto::dominance::compute_pareto_front;

/// The 1-based layer in which `candidate` first appears when successive
/// Pareto fronts are peeled off `population`. Rank 1 means non-dominated
/// (Pareto optimal) within `population`.
///
/// Terminates because each peel removes at least one element (the front
/// it just computed is always non-empty while `remaining` is non-empty).
pub fn dominance_rank(candidate: &ArchitectureCandidate, population: &[ArchitectureCandidate]) -> usize {
    let mut remaining: Vec<ArchitectureCandidate> = population.to_vec();
    let mut rank = 1;

    while !remaining.is_empty() {
        let front = compute_pareto_front(&remaining);

        if front.iter().any(|c| c.is_same_as(candidate)) {
            return rank;
        }

        remaining.retain(|c| !front.iter().any(|f| f.is_same_as(c)));
        rank += 1;
    }

    rank
}
