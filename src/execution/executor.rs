//! Simulated execution engine for [`AgentGraph`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use crate::error::Result;
use crate::execution::telemetry::{TelemetryLogger, TelemetrySummary};
use crate::graph::AgentGraph;

/// Whether every step is assumed to succeed, or whether success is drawn
/// from each component's declared reliability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Deterministic,
    Probabilistic,
}

/// The telemetry produced by one [`AgentExecutor::execute`] call.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    telemetry: TelemetryLogger,
}

impl ExecutionResult {
    pub fn telemetry(&self) -> &TelemetryLogger {
        &self.telemetry
    }

    pub fn summary(&self) -> TelemetrySummary {
        self.telemetry.summary()
    }
}

/// Walks an [`AgentGraph`] in topological order, recording one telemetry
/// record per node and stopping at the first failure.
///
/// Owns a local, seeded RNG so that probabilistic runs are reproducible
/// and isolated from any process-global generator.
pub struct AgentExecutor {
    mode: ExecutionMode,
    rng: StdRng,
}

impl AgentExecutor {
    pub fn new(mode: ExecutionMode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { mode, rng }
    }

    #[instrument(skip(self, graph), fields(mode = ?self.mode))]
    pub fn execute(&mut self, graph: &AgentGraph) -> Result<ExecutionResult> {
        let mut telemetry = TelemetryLogger::new();

        for node_id in graph.get_execution_order()? {
            let metadata = graph.get_metadata(&node_id)?;

            let success = match self.mode {
                ExecutionMode::Deterministic => true,
                ExecutionMode::Probabilistic => {
                    let draw: f64 = self.rng.gen_range(0.0..1.0);
                    draw <= metadata.reliability_score
                }
            };

            telemetry.log(
                node_id,
                metadata.avg_latency_ms,
                metadata.cost_per_call,
                success,
            );

            if !success {
                break;
            }
        }

        Ok(ExecutionResult { telemetry })
    }
}
