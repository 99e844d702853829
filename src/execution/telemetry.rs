//! Per-step execution telemetry and its aggregate summary.

/// One component invocation's recorded outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    pub component: String,
    pub latency_ms: f64,
    pub cost: f64,
    pub success: bool,
}

/// Aggregate view over a [`TelemetryLogger`]'s records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySummary {
    pub total_cost: f64,
    pub total_latency: f64,
    pub success: bool,
    pub steps: usize,
}

/// Ordered sequence of [`TelemetryRecord`]s produced by one execution run.
#[derive(Debug, Clone, Default)]
pub struct TelemetryLogger {
    records: Vec<TelemetryRecord>,
}

impl TelemetryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, component: impl Into<String>, latency_ms: f64, cost: f64, success: bool) {
        self.records.push(TelemetryRecord {
            component: component.into(),
            latency_ms,
            cost,
            success,
        });
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    /// `success` is the AND over all records, vacuously `true` for an
    /// empty log.
    pub fn summary(&self) -> TelemetrySummary {
        TelemetrySummary {
            total_cost: self.records.iter().map(|r| r.cost).sum(),
            total_latency: self.records.iter().map(|r| r.latency_ms).sum(),
            success: self.records.iter().all(|r| r.success),
            steps: self.records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_summarizes_as_vacuously_successful() {
        let logger = TelemetryLogger::new();
        let summary = logger.summary();
        assert_eq!(summary.steps, 0);
        assert!(summary.success);
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.total_latency, 0.0);
    }

    #[test]
    fn summary_aggregates_across_records() {
        let mut logger = TelemetryLogger::new();
        logger.log("a", 10.0, 0.1, true);
        logger.log("b", 20.0, 0.2, false);
        let summary = logger.summary();
        assert_eq!(summary.steps, 2);
        assert!(!summary.success);
        assert_eq!(summary.total_cost, 0.3);
        assert_eq!(summary.total_latency, 30.0);
    }
}
