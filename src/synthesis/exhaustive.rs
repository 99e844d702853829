//! Cartesian-product synthesizer: generates every feasible architecture.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::budget::{SynthesisBudget, SynthesisContext};
use crate::candidate::ArchitectureCandidate;
use crate::error::Result;
use crate::graph::AgentGraph;
use crate::registry::CapabilityRegistry;
use crate::synthesis::{satisfies_hard_constraints, Synthesizer};
use crate::task::TaskSpecification;

/// Enumerates the Cartesian product of per-stage candidate lists and
/// returns every combination that satisfies the task's hard constraints.
///
/// Unlike the other three synthesizers, this one does not reduce its
/// output to a Pareto front — it is the full feasible set, and Pareto
/// reduction is left to the caller when needed.
pub struct ExhaustiveSynthesizer<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> ExhaustiveSynthesizer<'a> {
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        Self { registry }
    }
}

impl<'a> Synthesizer for ExhaustiveSynthesizer<'a> {
    #[instrument(skip(self, task, budget), fields(stages = task.required_capabilities.len()))]
    fn synthesize(
        &self,
        task: &TaskSpecification,
        budget: Option<SynthesisBudget>,
    ) -> Result<Vec<ArchitectureCandidate>> {
        task.validate()?;

        let mut context = SynthesisContext::new(budget);

        let mut candidate_lists = Vec::with_capacity(task.required_capabilities.len());
        for capability in &task.required_capabilities {
            let candidates = self
                .registry
                .get_by_capability(capability, task.privacy_constraint);
            if candidates.is_empty() {
                debug!(%capability, "no candidates for capability; returning empty frontier");
                return Ok(Vec::new());
            }
            candidate_lists.push(candidates);
        }

        let mut architectures = Vec::new();

        for combination in candidate_lists.into_iter().multi_cartesian_product() {
            let mut graph = AgentGraph::new();
            let mut previous_node: Option<String> = None;

            for (idx, component) in combination.into_iter().enumerate() {
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

            architectures.push(ArchitectureCandidate::from_graph(graph));
        }

        debug!(count = architectures.len(), "exhaustive synthesis complete");
        Ok(architectures)
    }
}
