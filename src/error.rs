//! Unified error taxonomy for the synthesis and evaluation engine.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CrateError>;

/// All fallible outcomes that can cross a module boundary in this crate.
#[derive(Debug, Error)]
pub enum CrateError {
    /// Malformed task definition or duplicate component registration.
    #[error("config error: {0}")]
    Config(String),

    /// Edge insertion would create a cycle, or a node ID collides.
    #[error("graph error: {0}")]
    Graph(String),

    /// Registry lookup miss.
    #[error("not found: {0}")]
    NotFound(String),

    /// No candidate satisfies a required capability, or a hard constraint
    /// was violated after construction.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Synthesis budget (evaluation count or wall clock) was exhausted.
    ///
    /// Every synthesizer catches this internally and returns its partial
    /// frontier; it is a variant of `CrateError` so that `SynthesisContext`
    /// can surface it uniformly, not because callers are expected to see it.
    #[error("synthesis budget exceeded")]
    BudgetExceeded,
}
