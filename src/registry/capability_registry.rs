//! In-memory registry of agent components.
//!
//! Responsible for storing component metadata, filtering candidates by
//! capability, and applying hard constraints like privacy level.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{CrateError, Result};
use crate::registry::metadata::{ComponentMetadata, PrivacyLevel};

/// Append-only (within one synthesis episode) registry of components,
/// keyed by name.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    components: HashMap<String, Arc<ComponentMetadata>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component. Fails if the name already exists.
    pub fn register(&mut self, metadata: ComponentMetadata) -> Result<()> {
        if self.components.contains_key(&metadata.name) {
            return Err(CrateError::Config(format!(
                "component '{}' already registered",
                metadata.name
            )));
        }
        debug!(component = %metadata.name, "registering component");
        self.components
            .insert(metadata.name.clone(), Arc::new(metadata));
        Ok(())
    }

    /// Look up a single component by name.
    pub fn get(&self, name: &str) -> Result<Arc<ComponentMetadata>> {
        self.components
            .get(name)
            .cloned()
            .ok_or_else(|| CrateError::NotFound(name.to_string()))
    }

    /// Snapshot of every registered component.
    pub fn list_all(&self) -> Vec<Arc<ComponentMetadata>> {
        self.components.values().cloned().collect()
    }

    /// Components that support `capability`, optionally restricted to an
    /// exact privacy level (no hierarchical subsumption: "hybrid" does not
    /// satisfy a request for "internal" or "external").
    pub fn get_by_capability(
        &self,
        capability: &str,
        privacy_constraint: Option<PrivacyLevel>,
    ) -> Vec<Arc<ComponentMetadata>> {
        self.components
            .values()
            .filter(|meta| meta.supports(capability))
            .filter(|meta| match privacy_constraint {
                Some(level) => meta.privacy_level == level,
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
