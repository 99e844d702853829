//! Pareto dominance, frontier extraction, and approximation metrics.

pub mod coverage;
pub mod dominance;
pub mod hypervolume;
pub mod rank;
pub mod regret;
pub mod set;

pub use coverage::frontier_coverage;
pub use dominance::{compute_pareto_front, dominates};
pub use hypervolume::{
    hypervolume, hypervolume_loss, hypervolume_monte_carlo, ReferencePoint,
    APPROXIMATION_HYPERVOLUME_SAMPLES, APPROXIMATION_SEED,
};
pub use rank::dominance_rank;
pub use regret::{additive_regret, average_regret, Regret};
pub use set::ParetoSet;
