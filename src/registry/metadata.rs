//! Declarative description of a component that can occupy a pipeline stage.

use crate::error::{CrateError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The functional role a component plays in an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Model,
    Tool,
    Memory,
    Verification,
}

/// Governance classification of where a component is allowed to run or
/// what data it may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyLevel {
    Internal,
    External,
    Hybrid,
}

/// Formal, immutable description of a component in the agent capability
/// graph.
///
/// Contains only declarative properties used for capability matching,
/// constraint filtering and optimization scoring. `name` is the registry
/// key and must be unique within a [`CapabilityRegistry`](super::capability_registry::CapabilityRegistry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    pub name: String,
    pub component_type: ComponentType,
    pub capabilities: Vec<String>,
    pub cost_per_call: f64,
    pub avg_latency_ms: f64,
    pub reliability_score: f64,
    pub privacy_level: PrivacyLevel,
    pub input_schema: Option<Value>,
    pub output_schema: Option<Value>,
}

impl ComponentMetadata {
    /// Construct a new component, checking the invariants that a bare
    /// struct literal cannot enforce (non-negative cost/latency,
    /// reliability in `[0, 1]`).
    pub fn new(
        name: impl Into<String>,
        component_type: ComponentType,
        capabilities: Vec<String>,
        cost_per_call: f64,
        avg_latency_ms: f64,
        reliability_score: f64,
        privacy_level: PrivacyLevel,
    ) -> Result<Self> {
        if cost_per_call < 0.0 {
            return Err(CrateError::Config(format!(
                "cost_per_call must be >= 0, got {cost_per_call}"
            )));
        }
        if avg_latency_ms < 0.0 {
            return Err(CrateError::Config(format!(
                "avg_latency_ms must be >= 0, got {avg_latency_ms}"
            )));
        }
        if !(0.0..=1.0).contains(&reliability_score) {
            return Err(CrateError::Config(format!(
                "reliability_score must be in [0, 1], got {reliability_score}"
            )));
        }

        Ok(Self {
            name: name.into(),
            component_type,
            capabilities,
            cost_per_call,
            avg_latency_ms,
            reliability_score,
            privacy_level,
            input_schema: None,
            output_schema: None,
        })
    }

    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    pub fn with_output_schema(mut self, schema: Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Whether this component supports a required capability tag.
    pub fn supports(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}
