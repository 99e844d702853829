//! Immutable snapshot of a graph plus its cached aggregate metrics.

use std::sync::Arc;

use ordered_float::OrderedFloat;

use crate::graph::AgentGraph;

/// The three objectives every synthesizer optimizes: cost and latency are
/// minimized, reliability is maximized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub cost: f64,
    pub latency: f64,
    pub reliability: f64,
}

/// Hashable/orderable view of a candidate's objective triple, used for
/// metric-tuple equality (e.g. frontier coverage sets) where identity of
/// the underlying graph must not matter.
pub type MetricsKey = (OrderedFloat<f64>, OrderedFloat<f64>, OrderedFloat<f64>);

/// A fully constructed agent architecture with metrics computed once at
/// construction time.
///
/// `ArchitectureCandidate` deliberately does not implement `PartialEq` or
/// `Hash` itself: call sites that need metric-tuple equality (coverage
/// sets) should use [`metrics_key`](Self::metrics_key), and call sites
/// that need to exclude a candidate from comparison against itself (the
/// O(n^2) Pareto sweep) should use reference/pointer identity via
/// [`is_same_as`](Self::is_same_as). Conflating the two has historically
/// been a source of subtle frontier bugs.
#[derive(Debug, Clone)]
pub struct ArchitectureCandidate {
    graph: Arc<AgentGraph>,
    metrics: Metrics,
}

impl ArchitectureCandidate {
    pub fn new(graph: AgentGraph, total_cost: f64, total_latency: f64, total_reliability: f64) -> Self {
        Self {
            graph: Arc::new(graph),
            metrics: Metrics {
                cost: total_cost,
                latency: total_latency,
                reliability: total_reliability,
            },
        }
    }

    /// Build a candidate from a finished graph, computing its aggregate
    /// metrics.
    pub fn from_graph(graph: AgentGraph) -> Self {
        let cost = graph.total_cost();
        let latency = graph.total_latency();
        let reliability = graph.aggregate_reliability();
        Self::new(graph, cost, latency, reliability)
    }

    pub fn graph(&self) -> &AgentGraph {
        &self.graph
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn total_cost(&self) -> f64 {
        self.metrics.cost
    }

    pub fn total_latency(&self) -> f64 {
        self.metrics.latency
    }

    pub fn total_reliability(&self) -> f64 {
        self.metrics.reliability
    }

    /// Hashable/orderable key over the objective tuple, for metric-based
    /// set membership (frontier coverage).
    pub fn metrics_key(&self) -> MetricsKey {
        (
            OrderedFloat(self.metrics.cost),
            OrderedFloat(self.metrics.latency),
            OrderedFloat(self.metrics.reliability),
        )
    }

    /// Reference identity: `true` iff `self` and `other` are the same
    /// candidate object, regardless of whether their metrics happen to be
    /// equal. Used to exclude a candidate from comparison against itself.
    pub fn is_same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph)
    }
}
