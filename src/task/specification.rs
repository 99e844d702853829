//! Formal task definition: an ordered capability chain, hard feasibility
//! constraints, and scalar objective weights.

use std::collections::HashMap;

use crate::error::{CrateError, Result};
use crate::registry::PrivacyLevel;

/// The only objective-weight keys a [`TaskSpecification`] recognizes.
const OBJECTIVE_KEYS: [&str; 3] = ["cost", "latency", "error"];

/// Per-objective weighting for the shared synthesizer scoring function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveWeights {
    pub cost: f64,
    pub latency: f64,
    pub error: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            cost: 1.0,
            latency: 1.0,
            error: 1.0,
        }
    }
}

impl ObjectiveWeights {
    /// Build weights from a sparse map, validating that every key is one
    /// of `{cost, latency, error}`. Keys omitted from `weights` keep their
    /// default value of `1.0`.
    pub fn from_map(weights: &HashMap<String, f64>) -> Result<Self> {
        let mut out = Self::default();
        for (key, value) in weights {
            match key.as_str() {
                "cost" => out.cost = *value,
                "latency" => out.latency = *value,
                "error" => out.error = *value,
                other => {
                    return Err(CrateError::Config(format!(
                        "invalid objective weight key: {other} (expected one of {:?})",
                        OBJECTIVE_KEYS
                    )))
                }
            }
        }
        Ok(out)
    }
}

/// Formal definition of a task for agent synthesis: an ordered sequence of
/// required capabilities, hard feasibility constraints, and objective
/// weighting used to rank otherwise-feasible architectures.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSpecification {
    pub required_capabilities: Vec<String>,
    pub max_cost: Option<f64>,
    pub max_latency: Option<f64>,
    pub privacy_constraint: Option<PrivacyLevel>,
    pub objective_weights: ObjectiveWeights,
}

impl TaskSpecification {
    /// Construct a task, running [`validate`](Self::validate) eagerly so
    /// that malformed tasks never escape construction.
    pub fn new(
        required_capabilities: Vec<String>,
        max_cost: Option<f64>,
        max_latency: Option<f64>,
        privacy_constraint: Option<PrivacyLevel>,
        objective_weights: HashMap<String, f64>,
    ) -> Result<Self> {
        let task = Self {
            required_capabilities,
            max_cost,
            max_latency,
            privacy_constraint,
            objective_weights: ObjectiveWeights::from_map(&objective_weights)?,
        };
        task.validate()?;
        Ok(task)
    }

    /// Build directly from already-validated [`ObjectiveWeights`], for
    /// callers (synthesizers, tests) that already hold a typed weight set.
    pub fn with_weights(
        required_capabilities: Vec<String>,
        max_cost: Option<f64>,
        max_latency: Option<f64>,
        privacy_constraint: Option<PrivacyLevel>,
        objective_weights: ObjectiveWeights,
    ) -> Result<Self> {
        let task = Self {
            required_capabilities,
            max_cost,
            max_latency,
            privacy_constraint,
            objective_weights,
        };
        task.validate()?;
        Ok(task)
    }

    /// Ensure the task definition is well-formed. Unlike the reference
    /// implementation this crate was distilled from — which constructed a
    /// `ValueError` for the empty-capability case but never raised it —
    /// this actually returns `Err` on an empty capability chain.
    pub fn validate(&self) -> Result<()> {
        if self.required_capabilities.is_empty() {
            return Err(CrateError::Config(
                "task must define at least one required capability".to_string(),
            ));
        }
        Ok(())
    }
}
