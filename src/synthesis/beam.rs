//! Budget-aware beam search synthesizer.

use tracing::{debug, instrument};

use crate::budget::{SynthesisBudget, SynthesisContext};
use crate::candidate::ArchitectureCandidate;
use crate::error::Result;
use crate::graph::AgentGraph;
use crate::pareto::ParetoSet;
use crate::registry::CapabilityRegistry;
use crate::synthesis::scoring::score;
use crate::synthesis::{satisfies_hard_constraints, Synthesizer};
use crate::task::TaskSpecification;

/// Maintains the top-`k` partial architectures per stage by cumulative
/// scalar score, but keeps the *entire* extended beam at the final stage
/// so that Pareto extraction operates over the full multi-objective
/// population rather than the scalar-score-truncated one. This is
/// deliberate, not an oversight: a single scalar score under-approximates
/// the joint cost/latency/reliability trade-off.
pub struct BeamSynthesizer<'a> {
    registry: &'a CapabilityRegistry,
    beam_width: usize,
}

impl<'a> BeamSynthesizer<'a> {
    pub fn new(registry: &'a CapabilityRegistry, beam_width: usize) -> Self {
        Self {
            registry,
            beam_width,
        }
    }
}

impl<'a> Synthesizer for BeamSynthesizer<'a> {
    #[instrument(skip(self, task, budget), fields(stages = task.required_capabilities.len(), beam_width = self.beam_width))]
    fn synthesize(
        &self,
        task: &TaskSpecification,
        budget: Option<SynthesisBudget>,
    ) -> Result<Vec<ArchitectureCandidate>> {
        task.validate()?;

        let mut context = SynthesisContext::new(budget);

        let mut beam: Vec<(AgentGraph, f64)> = vec![(AgentGraph::new(), 0.0)];
        let last_stage = task.required_capabilities.len().saturating_sub(1);

        for (stage_idx, capability) in task.required_capabilities.iter().enumerate() {
            let candidates = self
                .registry
                .get_by_capability(capability, task.privacy_constraint);

            let mut extended = Vec::new();

            for (graph, cumulative_score) in &beam {
                if candidates.is_empty() {
                    continue;
                }

                for component in &candidates {
                    let mut new_graph = graph.copy();
                    let node_id = format!("{}_{stage_idx}", component.name);
                    new_graph.add_component(&node_id, component.clone())?;

                    if stage_idx > 0 {
                        let nodes = new_graph.list_nodes();
                        if nodes.len() > 1 {
                            let prev = nodes[nodes.len() - 2].clone();
                            new_graph.add_edge(&prev, &node_id)?;
                        }
                    }

                    let increment = score(component, &task.objective_weights);
                    extended.push((new_graph, cumulative_score + increment));
                }
            }

            extended.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            beam = if stage_idx < last_stage {
                extended.into_iter().take(self.beam_width).collect()
            } else {
                extended
            };
        }

        beam.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut pareto_set = ParetoSet::new();

        for (graph, _) in beam {
            if context.register_evaluation().is_err() {
                break;
            }

            let total_cost = graph.total_cost();
            let total_latency = graph.total_latency();

            if !satisfies_hard_constraints(task, total_cost, total_latency) {
                continue;
            }

            pareto_set.add(ArchitectureCandidate::from_graph(graph));
        }

        debug!(count = pareto_set.len(), "beam synthesis complete");
        Ok(pareto_set.into_vec())
    }
}
