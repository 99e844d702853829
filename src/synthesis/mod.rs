//! Synthesizers: strategies producing an approximate Pareto set of
//! architectures for a task under an optional budget.
//!
//! All four strategies share one contract — `(task, budget) -> Vec<ArchitectureCandidate>` —
//! expressed here as the [`Synthesizer`] trait. Each strategy carries its
//! own construction-time parameters (beam width, registry handle) rather
//! than the trait growing per-strategy options.

pub mod beam;
pub mod exhaustive;
pub mod heuristic;
pub mod random;
pub mod scoring;

pub use beam::BeamSynthesizer;
pub use exhaustive::ExhaustiveSynthesizer;
pub use heuristic::HeuristicSynthesizer;
pub use random::RandomSynthesizer;
pub use scoring::score_metrics;

use crate::budget::SynthesisBudget;
use crate::candidate::ArchitectureCandidate;
use crate::error::Result;
use crate::task::TaskSpecification;

/// Common contract for every synthesis strategy.
pub trait Synthesizer {
    fn synthesize(
        &self,
        task: &TaskSpecification,
        budget: Option<SynthesisBudget>,
    ) -> Result<Vec<ArchitectureCandidate>>;
}

/// Hard-constraint post-check shared by every synthesizer: does this
/// candidate's cost/latency stay within the task's ceilings?
pub(crate) fn satisfies_hard_constraints(
    task: &TaskSpecification,
    total_cost: f64,
    total_latency: f64,
) -> bool {
    if let Some(max_cost) = task.max_cost {
        if total_cost > max_cost {
            return false;
        }
    }
    if let Some(max_latency) = task.max_latency {
        if total_latency > max_latency {
            return false;
        }
    }
    true
}
