use crate::solver::core::SolverStatus;
use crate::timers::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Progress and termination information for the SPG solver.
///
/// A fresh record is produced for each run.  It is updated once per
/// iteration, and once per line search trial for the evaluation count and
/// best objective value.  After `solve` returns it is the final report, with
/// `status` giving the reason for termination.

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpgInfo {
    /// objective value at the current iterate
    pub f: f64,
    /// best objective value seen so far
    pub fbest: f64,
    /// infinity norm of the projected gradient at the current iterate
    pub pgnorminf: f64,
    /// Euclidean norm of the projected gradient at the current iterate
    pub pgnorm2: f64,
    /// number of completed iterations
    pub iterations: u32,
    /// number of objective/gradient evaluations
    pub evaluations: u32,
    /// number of projections
    pub projections: u32,
    /// solve time in seconds, excluding printing
    pub solve_time: f64,
    /// termination status
    pub status: SolverStatus,
}

impl Default for SpgInfo {
    fn default() -> Self {
        Self {
            f: f64::NAN,
            fbest: f64::NAN,
            pgnorminf: f64::NAN,
            pgnorm2: f64::NAN,
            iterations: 0,
            evaluations: 0,
            projections: 0,
            solve_time: 0f64,
            status: SolverStatus::Unsolved,
        }
    }
}

impl SpgInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the current iterate is the best one seen so far
    pub fn is_best(&self) -> bool {
        self.f <= self.fbest
    }

    /// Human readable termination reason
    pub fn reason(&self) -> &'static str {
        self.status.reason()
    }

    pub(crate) fn reset(&mut self, timers: &mut Timers) {
        *self = Self::default();
        timers.reset_timer("solve");
    }

    /// record the objective value of a new trial point, returning `true`
    /// if it improves on the best value so far
    pub(crate) fn record_evaluation(&mut self, f: f64) -> bool {
        self.evaluations += 1;
        self.f = f;
        // fbest is NaN only before the first evaluation
        if f < self.fbest || self.fbest.is_nan() {
            self.fbest = f;
            true
        } else {
            false
        }
    }

    pub(crate) fn record_projection(&mut self) {
        self.projections += 1;
    }

    pub(crate) fn save_pgnorms(&mut self, pgnorminf: f64, pgnorm2: f64) {
        self.pgnorminf = pgnorminf;
        self.pgnorm2 = pgnorm2;
    }

    pub(crate) fn finalize(&mut self, timers: &Timers) {
        self.solve_time = timers.elapsed("solve").as_secs_f64();
    }
}

#[test]
fn test_record_evaluation() {
    let mut info = SpgInfo::new();
    assert!(info.record_evaluation(3.0));
    assert!(!info.record_evaluation(4.0));
    assert!(!info.is_best());
    assert!(info.record_evaluation(1.0));
    assert!(info.is_best());
    assert_eq!(info.evaluations, 3);
    assert_eq!(info.fbest, 1.0);
    assert_eq!(info.f, 1.0);
}
