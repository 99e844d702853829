//! Matrix evaluation of (task × synthesizer) pairs with repeated executor runs.

use std::collections::HashMap;

use tracing::{info, instrument};

use crate::error::Result;
use crate::execution::{AgentExecutor, ExecutionMode};
use crate::synthesis::{score_metrics, Synthesizer};
use crate::task::TaskSpecification;

/// Aggregate outcome of running one task through one synthesizer and
/// executing the resulting architecture `runs_per_experiment` times.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub task_name: String,
    pub synthesizer_name: String,
    pub avg_cost: f64,
    pub avg_latency: f64,
    pub success_rate: f64,
}

/// Runs every `(task, synthesizer)` pair once through synthesis, picks the
/// single best-scoring candidate from the returned frontier, and executes
/// it `runs_per_experiment` times to measure realized cost/latency/success.
pub struct EvaluationHarness<'a> {
    tasks: HashMap<String, TaskSpecification>,
    synthesizers: HashMap<String, Box<dyn Synthesizer + 'a>>,
    runs_per_experiment: u32,
    execution_mode: ExecutionMode,
    base_seed: Option<u64>,
}

impl<'a> EvaluationHarness<'a> {
    pub fn new(
        tasks: HashMap<String, TaskSpecification>,
        synthesizers: HashMap<String, Box<dyn Synthesizer + 'a>>,
        runs_per_experiment: u32,
        execution_mode: ExecutionMode,
        base_seed: Option<u64>,
    ) -> Self {
        Self {
            tasks,
            synthesizers,
            runs_per_experiment,
            execution_mode,
            base_seed,
        }
    }

    #[instrument(skip(self), fields(tasks = self.tasks.len(), synthesizers = self.synthesizers.len()))]
    pub fn run(&self) -> Result<Vec<EvaluationResult>> {
        let mut results = Vec::with_capacity(self.tasks.len() * self.synthesizers.len());

        for (task_name, task) in &self.tasks {
            for (synth_name, synthesizer) in &self.synthesizers {
                let candidates = synthesizer.synthesize(task, None)?;

                let result = match candidates
                    .iter()
                    .min_by(|a, b| {
                        score_metrics(a.metrics(), &task.objective_weights)
                            .partial_cmp(&score_metrics(b.metrics(), &task.objective_weights))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    }) {
                    None => EvaluationResult {
                        task_name: task_name.clone(),
                        synthesizer_name: synth_name.clone(),
                        avg_cost: 0.0,
                        avg_latency: 0.0,
                        success_rate: 0.0,
                    },
                    Some(best) => {
                        let graph = best.graph().clone();
                        let mut total_cost = 0.0;
                        let mut total_latency = 0.0;
                        let mut successes = 0u32;

                        for run in 0..self.runs_per_experiment {
                            let seed = self.base_seed.map(|base| base + run as u64);
                            let mut executor = AgentExecutor::new(self.execution_mode, seed);
                            let summary = executor.execute(&graph)?.summary();
                            total_cost += summary.total_cost;
                            total_latency += summary.total_latency;
                            successes += summary.success as u32;
                        }

                        let n = self.runs_per_experiment.max(1) as f64;
                        EvaluationResult {
                            task_name: task_name.clone(),
                            synthesizer_name: synth_name.clone(),
                            avg_cost: total_cost / n,
                            avg_latency: total_latency / n,
                            success_rate: successes as f64 / n,
                        }
                    }
                };

                info!(
                    task = %result.task_name,
                    synthesizer = %result.synthesizer_name,
                    success_rate = result.success_rate,
                    "evaluation experiment complete"
                );
                results.push(result);
            }
        }

        Ok(results)
    }
}
