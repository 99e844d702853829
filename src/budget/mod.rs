//! Evaluation and wall-clock budget enforcement for synthesis runs.

pub mod context;
pub mod types;

pub use context::SynthesisContext;
pub use types::SynthesisBudget;
