//! Multi-objective synthesis and evaluation of linear agent pipelines.
//!
//! Given a registry of annotated components and a formal task definition,
//! this crate synthesizes an approximate Pareto frontier of feasible
//! architectures — linear chains of models, tools, memory modules, and
//! verifiers — trading off cost, latency, and reliability, and evaluates
//! that frontier's quality against a ground truth via coverage,
//! hypervolume loss, and regret.

pub mod budget;
pub mod candidate;
pub mod error;
pub mod evaluation;
pub mod execution;
pub mod graph;
pub mod logging;
pub mod pareto;
pub mod registry;
pub mod synthesis;
pub mod task;

pub use budget::{SynthesisBudget, SynthesisContext};
pub use candidate::{ArchitectureCandidate, Metrics, MetricsKey};
pub use error::{CrateError, Result};
pub use evaluation::{evaluate_approximation, EvaluationHarness, EvaluationResult};
pub use execution::{AgentExecutor, ExecutionMode, ExecutionResult};
pub use graph::AgentGraph;
pub use pareto::{compute_pareto_front, dominance_rank, ParetoSet};
pub use registry::{CapabilityRegistry, ComponentMetadata, ComponentType, PrivacyLevel};
pub use synthesis::{
    BeamSynthesizer, ExhaustiveSynthesizer, HeuristicSynthesizer, RandomSynthesizer, Synthesizer,
};
pub use task::{ObjectiveWeights, TaskSpecification};
