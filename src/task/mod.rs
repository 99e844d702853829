//! Task specification: the formal input to every synthesizer.

pub mod specification;

pub use specification::{ObjectiveWeights, TaskSpecification};
