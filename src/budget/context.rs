//! Budget context: runtime state synthesizers consult on every evaluation.

use std::time::Instant;

use tracing::warn;

use crate::budget::types::SynthesisBudget;
use crate::error::{CrateError, Result};

/// Tracks evaluation count and time usage during one synthesis run. Every
/// synthesizer must consult this before counting an architecture as
/// evaluated.
#[derive(Debug)]
pub struct SynthesisContext {
    budget: Option<SynthesisBudget>,
    evaluations: u64,
    start_time: Instant,
}

impl SynthesisContext {
    pub fn new(budget: Option<SynthesisBudget>) -> Self {
        Self {
            budget,
            evaluations: 0,
            start_time: Instant::now(),
        }
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn evaluation_limit_reached(&self) -> bool {
        match self.budget.and_then(|b| b.max_evaluations) {
            Some(limit) => self.evaluations >= limit,
            None => false,
        }
    }

    fn time_limit_reached(&self) -> bool {
        match self.budget.and_then(|b| b.max_time_seconds) {
            Some(limit) => self.start_time.elapsed().as_secs_f64() >= limit,
            None => false,
        }
    }

    /// Non-mutating check: would [`register_evaluation`](Self::register_evaluation)
    /// currently succeed?
    pub fn can_evaluate(&self) -> bool {
        !self.evaluation_limit_reached() && !self.time_limit_reached()
    }

    /// Must be called immediately before counting an architecture as
    /// evaluated. Raises [`CrateError::BudgetExceeded`] if either limit is
    /// already reached; otherwise increments the evaluation counter.
    pub fn register_evaluation(&mut self) -> Result<()> {
        if self.evaluation_limit_reached() || self.time_limit_reached() {
            warn!(evaluations = self.evaluations, "synthesis budget exceeded");
            return Err(CrateError::BudgetExceeded);
        }
        self.evaluations += 1;
        Ok(())
    }
}
