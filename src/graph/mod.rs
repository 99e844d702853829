//! Architecture graph: a DAG of component instances with aggregate queries.

pub mod agent_graph;

pub use agent_graph::AgentGraph;
