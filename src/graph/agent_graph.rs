//! Directed acyclic graph representing one candidate agent architecture.
//!
//! Nodes carry a [`ComponentMetadata`] reference; edges denote
//! execution/data flow order. The graphs this crate builds are small and
//! strictly linear, so topological sort and cycle detection are
//! implemented directly with Kahn's algorithm rather than via an external
//! graph crate.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::error::{CrateError, Result};
use crate::registry::ComponentMetadata;

/// A directed acyclic graph of component instances.
#[derive(Debug, Clone, Default)]
pub struct AgentGraph {
    nodes: HashMap<String, Arc<ComponentMetadata>>,
    /// Insertion order of nodes, used only to break topological-sort ties
    /// deterministically.
    node_order: Vec<String>,
    edges: Vec<(String, String)>,
    adjacency: HashMap<String, Vec<String>>,
}

impl AgentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Fails if `node_id` already exists in the graph.
    pub fn add_component(&mut self, node_id: &str, metadata: Arc<ComponentMetadata>) -> Result<()> {
        let node_id = node_id.to_string();
        if self.nodes.contains_key(&node_id) {
            return Err(CrateError::Graph(format!(
                "node '{node_id}' already exists in graph"
            )));
        }
        self.node_order.push(node_id.clone());
        self.nodes.insert(node_id.clone(), metadata);
        self.adjacency.entry(node_id).or_default();
        Ok(())
    }

    /// Add an edge. The insertion is attempted, then acyclicity is
    /// checked; on failure the edge is rolled back and a [`CrateError::Graph`]
    /// is returned.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.nodes.contains_key(from) || !self.nodes.contains_key(to) {
            return Err(CrateError::Graph(format!(
                "cannot add edge {from} -> {to}: endpoint not in graph"
            )));
        }

        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        self.edges.push((from.to_string(), to.to_string()));

        if !self.validate() {
            // Roll back.
            self.adjacency.get_mut(from).unwrap().pop();
            self.edges.pop();
            return Err(CrateError::Graph(
                "edge creates cycle; AgentGraph must remain acyclic".to_string(),
            ));
        }

        Ok(())
    }

    /// Deep structural copy: same node IDs, shared (by `Arc`) metadata,
    /// same edges.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// `true` iff the graph currently has no directed cycle.
    pub fn validate(&self) -> bool {
        self.topo_sort().is_some()
    }

    /// Any topological order of the nodes, ties broken by insertion order.
    /// Returns an error only if the graph is (unexpectedly) cyclic.
    pub fn get_execution_order(&self) -> Result<Vec<String>> {
        self.topo_sort()
            .ok_or_else(|| CrateError::Graph("graph contains a cycle".to_string()))
    }

    fn topo_sort(&self) -> Option<Vec<String>> {
        let mut in_degree: HashMap<&str, usize> =
            self.node_order.iter().map(|n| (n.as_str(), 0)).collect();
        for (_, to) in &self.edges {
            *in_degree.get_mut(to.as_str()).unwrap() += 1;
        }

        // Deterministic tie-break: process zero-in-degree nodes in
        // insertion order.
        let mut queue: VecDeque<&str> = self
            .node_order
            .iter()
            .map(String::as_str)
            .filter(|n| in_degree[n] == 0)
            .collect();

        let mut order = Vec::with_capacity(self.node_order.len());
        let mut in_degree = in_degree;

        while let Some(node) = queue.pop_front() {
            order.push(node.to_string());
            if let Some(neighbors) = self.adjacency.get(node) {
                for neighbor in neighbors {
                    let degree = in_degree.get_mut(neighbor.as_str()).unwrap();
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(neighbor.as_str());
                    }
                }
            }
        }

        if order.len() == self.node_order.len() {
            Some(order)
        } else {
            None
        }
    }

    pub fn get_metadata(&self, node_id: &str) -> Result<Arc<ComponentMetadata>> {
        self.nodes
            .get(node_id)
            .cloned()
            .ok_or_else(|| CrateError::NotFound(node_id.to_string()))
    }

    pub fn list_nodes(&self) -> Vec<String> {
        self.node_order.clone()
    }

    pub fn total_cost(&self) -> f64 {
        self.nodes.values().map(|m| m.cost_per_call).sum()
    }

    pub fn total_latency(&self) -> f64 {
        self.nodes.values().map(|m| m.avg_latency_ms).sum()
    }

    /// Multiplicative reliability model under an independent-failure
    /// assumption.
    pub fn aggregate_reliability(&self) -> f64 {
        self.nodes.values().map(|m| m.reliability_score).product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ComponentType, PrivacyLevel};

    fn meta(name: &str) -> Arc<ComponentMetadata> {
        Arc::new(
            ComponentMetadata::new(
                name,
                ComponentType::Tool,
                vec!["c".to_string()],
                1.0,
                10.0,
                0.9,
                PrivacyLevel::External,
            )
            .unwrap(),
        )
    }

    #[test]
    fn linear_chain_validates_and_orders() {
        let mut graph = AgentGraph::new();
        graph.add_component("a_0", meta("a")).unwrap();
        graph.add_component("b_1", meta("b")).unwrap();
        graph.add_edge("a_0", "b_1").unwrap();

        assert!(graph.validate());
        assert_eq!(graph.get_execution_order().unwrap(), vec!["a_0", "b_1"]);
    }

    #[test]
    fn cyclic_edge_is_rejected_and_rolled_back() {
        let mut graph = AgentGraph::new();
        graph.add_component("a_0", meta("a")).unwrap();
        graph.add_component("b_1", meta("b")).unwrap();
        graph.add_edge("a_0", "b_1").unwrap();

        let err = graph.add_edge("b_1", "a_0").unwrap_err();
        assert!(matches!(err, CrateError::Graph(_)));
        // Rejected insertion must not have mutated graph state.
        assert!(graph.validate());
        assert_eq!(graph.get_execution_order().unwrap(), vec!["a_0", "b_1"]);
    }

    #[test]
    fn duplicate_node_id_is_rejected() {
        let mut graph = AgentGraph::new();
        graph.add_component("a_0", meta("a")).unwrap();
        let err = graph.add_component("a_0", meta("a")).unwrap_err();
        assert!(matches!(err, CrateError::Graph(_)));
    }

    #[test]
    fn copy_preserves_nodes_and_edges() {
        let mut graph = AgentGraph::new();
        graph.add_component("a_0", meta("a")).unwrap();
        graph.add_component("b_1", meta("b")).unwrap();
        graph.add_edge("a_0", "b_1").unwrap();

        let copy = graph.copy();
        assert_eq!(copy.list_nodes(), graph.list_nodes());
        assert_eq!(copy.total_cost(), graph.total_cost());
        assert_eq!(
            copy.get_execution_order().unwrap(),
            graph.get_execution_order().unwrap()
        );
    }

    #[test]
    fn aggregate_metrics_are_sums_and_products() {
        let mut graph = AgentGraph::new();
        graph.add_component("a_0", meta("a")).unwrap();
        graph.add_component("b_1", meta("b")).unwrap();
        graph.add_edge("a_0", "b_1").unwrap();

        assert_eq!(graph.total_cost(), 2.0);
        assert_eq!(graph.total_latency(), 20.0);
        assert!((graph.aggregate_reliability() - 0.81).abs() < 1e-9);
    }

    #[test]
    fn reliability_is_monotone_non_increasing_as_nodes_are_added() {
        let mut graph = AgentGraph::new();
        let before = graph.aggregate_reliability();
        graph.add_component("a_0", meta("a")).unwrap();
        let after = graph.aggregate_reliability();
        assert!(after <= before);
    }
}
