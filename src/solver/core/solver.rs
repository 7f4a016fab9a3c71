use super::SettingsError;
use crate::algebra::VectorError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Solver has not terminated (or hasn't run).
    #[default]
    Unsolved,
    /// Infinity norm of the projected gradient is below `eps1`.
    ConvergedInfNorm,
    /// Euclidean norm of the projected gradient is below `eps2`.
    ConvergedTwoNorm,
    /// Relative change in the objective fell below `eps3`.
    Stagnation,
    /// Iteration limit reached.
    MaxIterations,
    /// Objective/gradient evaluation limit reached.
    MaxEvaluations,
}

impl SolverStatus {
    /// `true` if either projected gradient criterion was satisfied
    pub fn is_converged(&self) -> bool {
        matches!(
            *self,
            SolverStatus::ConvergedInfNorm | SolverStatus::ConvergedTwoNorm
        )
    }

    /// `true` for every status other than `Unsolved`
    pub fn is_terminal(&self) -> bool {
        *self != SolverStatus::Unsolved
    }

    /// Human readable termination reason
    pub fn reason(&self) -> &'static str {
        match self {
            SolverStatus::Unsolved => "Work in progress",
            SolverStatus::ConvergedInfNorm => {
                "Convergence with projected gradient infinite-norm"
            }
            SolverStatus::ConvergedTwoNorm => "Convergence with projected gradient 2-norm",
            SolverStatus::Stagnation => "Too small relative change in function value",
            SolverStatus::MaxIterations => "Too many iterations",
            SolverStatus::MaxEvaluations => "Too many function evaluations",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------
// Solver error type
// ---------------------------------

/// Error type returned by solver construction and `solve`.
///
/// Budget exhaustion, stagnation and convergence are *not* errors; they are
/// reported through [`SolverStatus`].
#[derive(Error, Debug)]
pub enum SolverError {
    /// The settings failed validation
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
    /// A vector operation failed, e.g. a callback produced a vector of the wrong shape
    #[error("Vector operation failed: {0}")]
    Vector(#[from] VectorError),
    /// Writing to the print target failed
    #[error("Print target error: {0}")]
    Io(#[from] std::io::Error),
}

#[test]
fn test_status_reasons() {
    assert!(!SolverStatus::default().is_terminal());
    assert!(SolverStatus::ConvergedTwoNorm.is_converged());
    assert!(!SolverStatus::MaxEvaluations.is_converged());
    assert!(SolverStatus::Stagnation.is_terminal());
    assert_eq!(SolverStatus::MaxIterations.reason(), "Too many iterations");
    assert_eq!(format!("{}", SolverStatus::Stagnation), "Stagnation");
}
