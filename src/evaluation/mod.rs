//! Evaluation harness and approximation-quality metrics report.

pub mod harness;
pub mod metrics;

pub use harness::{EvaluationHarness, EvaluationResult};
pub use metrics::evaluate_approximation;
