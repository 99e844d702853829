//! Incremental non-dominated set.

use crate::candidate::ArchitectureCandidate;
use crate::pareto::dominance::dominates;

/// Maintains a non-dominated architecture set incrementally.
///
/// Used by the random and beam synthesizers to fold a stream of candidates
/// down to an approximate Pareto frontier without retaining dominated
/// members.
#[derive(Debug, Default)]
pub struct ParetoSet {
    members: Vec<ArchitectureCandidate>,
}

impl ParetoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `candidate` iff no current member dominates it; if
    /// accepted, remove every current member that `candidate` dominates.
    /// Returns whether the candidate was inserted.
    pub fn add(&mut self, candidate: ArchitectureCandidate) -> bool {
        if self.contains(&candidate) {
            return false;
        }

        if self.members.iter().any(|existing| dominates(existing, &candidate)) {
            return false;
        }

        self.members.retain(|existing| !dominates(&candidate, existing));
        self.members.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, candidate: &ArchitectureCandidate) -> bool {
        self.members.iter().any(|m| m.is_same_as(candidate))
    }

    pub fn into_vec(self) -> Vec<ArchitectureCandidate> {
        self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchitectureCandidate> {
        self.members.iter()
    }
}
