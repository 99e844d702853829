//! Budget type definitions.

/// Hard constraints on the synthesis process itself (not on the
/// architectures it produces).
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisBudget {
    /// Maximum number of architecture evaluations allowed.
    pub max_evaluations: Option<u64>,
    /// Maximum wall-clock time allowed for synthesis.
    pub max_time_seconds: Option<f64>,
    /// Optional deterministic seed for stochastic synthesizers.
    pub random_seed: Option<u64>,
}

impl SynthesisBudget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_evaluations(mut self, max_evaluations: u64) -> Self {
        self.max_evaluations = Some(max_evaluations);
        self
    }

    pub fn with_max_time_seconds(mut self, max_time_seconds: f64) -> Self {
        self.max_time_seconds = Some(max_time_seconds);
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}
