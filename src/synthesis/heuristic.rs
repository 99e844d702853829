//! Greedy per-stage synthesizer: one deterministic candidate.

use tracing::{debug, instrument};

use crate::budget::{SynthesisBudget, SynthesisContext};
use crate::candidate::ArchitectureCandidate;
use crate::error::{CrateError, Result};
use crate::graph::AgentGraph;
use crate::registry::CapabilityRegistry;
use crate::synthesis::scoring::score;
use crate::synthesis::Synthesizer;
use crate::task::TaskSpecification;

/// Picks the lowest-scoring candidate at each stage under the task's
/// objective weights. Fails outright (rather than returning an empty
/// frontier) if any stage has no eligible components, or if the
/// constructed chain violates a hard constraint.
pub struct HeuristicSynthesizer<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> HeuristicSynthesizer<'a> {
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        Self { registry }
    }

    #[instrument(skip(self, task, budget), fields(stages = task.required_capabilities.len()))]
    pub fn synthesize(
        &self,
        task: &TaskSpecification,
        budget: Option<SynthesisBudget>,
    ) -> Result<Vec<ArchitectureCandidate>> {
        task.validate()?;

        let mut context = SynthesisContext::new(budget);
        let mut graph = AgentGraph::new();
        let mut previous_node: Option<String> = None;

        for (idx, capability) in task.required_capabilities.iter().enumerate() {
            let mut candidates = self
                .registry
                .get_by_capability(capability, task.privacy_constraint);

            if candidates.is_empty() {
                return Err(CrateError::Synthesis(format!(
                    "no components available for capability '{capability}' under given constraints"
                )));
            }

            candidates.sort_by(|a, b| {
                score(a, &task.objective_weights)
                    .partial_cmp(&score(b, &task.objective_weights))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let selected = candidates.into_iter().next().unwrap();
            let node_id = format!("{}_{idx}", selected.name);
            debug!(%node_id, "heuristic stage selection");

            graph.add_component(&node_id, selected)?;
            if let Some(prev) = &previous_node {
                graph.add_edge(prev, &node_id)?;
            }
            previous_node = Some(node_id);
        }

        if context.register_evaluation().is_err() {
            return Ok(Vec::new());
        }

        let total_cost = graph.total_cost();
        let total_latency = graph.total_latency();

        if let Some(max_cost) = task.max_cost {
            if total_cost > max_cost {
                return Err(CrateError::Synthesis(
                    "constructed agent exceeds max_cost constraint".to_string(),
                ));
            }
        }
        if let Some(max_latency) = task.max_latency {
            if total_latency > max_latency {
                return Err(CrateError::Synthesis(
                    "constructed agent exceeds max_latency constraint".to_string(),
                ));
            }
        }

        Ok(vec![ArchitectureCandidate::from_graph(graph)])
    }
}

impl<'a> Synthesizer for HeuristicSynthesizer<'a> {
    fn synthesize(
        &self,
        task: &TaskSpecification,
        budget: Option<SynthesisBudget>,
    ) -> Result<Vec<ArchitectureCandidate>> {
        HeuristicSynthesizer::synthesize(self, task, budget)
    }
}
