use super::SpgInfo;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of [`SpgSolver::solve`](super::SpgSolver::solve)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpgSolution<V> {
    /// best point found during the run
    pub x: V,
    /// final progress and termination information
    pub info: SpgInfo,
}

impl<V> SpgSolution<V> {
    /// objective value at `x`
    pub fn objective(&self) -> f64 {
        self.info.fbest
    }

    /// `true` if the run ended on one of the projected gradient tests
    pub fn is_converged(&self) -> bool {
        self.info.status.is_converged()
    }
}
