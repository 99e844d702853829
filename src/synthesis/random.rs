//! Seeded random sampling synthesizer with an incremental Pareto frontier.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::budget::{SynthesisBudget, SynthesisContext};
use crate::candidate::ArchitectureCandidate;
use crate::error::Result;
use crate::graph::AgentGraph;
use crate::pareto::ParetoSet;
use crate::registry::CapabilityRegistry;
use crate::synthesis::{satisfies_hard_constraints, Synthesizer};
use crate::task::TaskSpecification;

/// Uniformly samples one architecture per iteration until the budget is
/// exhausted, folding feasible samples into an incremental [`ParetoSet`].
///
/// Requires a finite budget to terminate: with no `max_evaluations` and no
/// `max_time_seconds`, the sampling loop never stops.
pub struct RandomSynthesizer<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> RandomSynthesizer<'a> {
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        Self { registry }
    }
}

impl<'a> Synthesizer for RandomSynthesizer<'a> {
    #[instrument(skip(self, task, budget), fields(stages = task.required_capabilities.len()))]
    fn synthesize(
        &self,
        task: &TaskSpecification,
        budget: Option<SynthesisBudget>,
    ) -> Result<Vec<ArchitectureCandidate>> {
        task.validate()?;

        let mut context = SynthesisContext::new(budget);
        let mut pareto_set = ParetoSet::new();

        let mut rng = match budget.and_then(|b| b.random_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut candidate_lists = Vec::with_capacity(task.required_capabilities.len());
        for capability in &task.required_capabilities {
            let candidates = self
                .registry
                .get_by_capability(capability, task.privacy_constraint);
            if candidates.is_empty() {
                return Ok(Vec::new());
            }
            candidate_lists.push(candidates);
        }

        loop {
            let mut graph = AgentGraph::new();
            let mut previous_node: Option<String> = None;

            for (idx, candidates) in candidate_lists.iter().enumerate() {
                let choice_idx = rng.gen_range(0..candidates.len());
                let component = candidates[choice_idx].clone();
                let node_id = format!("{}_{idx}", component.name);
                graph.add_component(&node_id, component)?;

                if let Some(prev) = &previous_node {
                    graph.add_edge(prev, &node_id)?;
                }
                previous_node = Some(node_id);
            }

            if context.register_evaluation().is_err() {
                break;
            }

            let total_cost = graph.total_cost();
            let total_latency = graph.total_latency();

            if !satisfies_hard_constraints(task, total_cost, total_latency) {
                continue;
            }

            let candidate = ArchitectureCandidate::from_graph(graph);
            pareto_set.add(candidate);
        }

        debug!(count = pareto_set.len(), "random synthesis complete");
        Ok(pareto_set.into_vec())
    }
}
