//! Simulated execution of architectures and the telemetry they produce.

pub mod executor;
pub mod telemetry;

pub use executor::{AgentExecutor, ExecutionMode, ExecutionResult};
pub use telemetry::{TelemetryLogger, TelemetryRecord, TelemetrySummary};
