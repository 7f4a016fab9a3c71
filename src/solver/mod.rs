//! SPG solver main module.
//!
//! This module contains the [`SpgSolver`] together with its settings,
//! progress information and result types, and the
//! [traits](crate::solver::core::traits) through which a problem is
//! supplied to it.
//!
//! A problem is defined by two callbacks.  The objective returns `f(x)` and
//! writes the gradient into a caller supplied vector.  The projector writes
//! the Euclidean projection of a point onto the feasible set.  Both may be
//! given as closures.

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//user facing traits and types required to interact with solver
pub use crate::solver::core::traits;
pub use crate::solver::core::traits::{NoConstraints, Objective, Projector};
pub use crate::solver::core::{SettingsError, SolverError, SolverStatus};

//report callback signature
pub use crate::solver::core::callbacks::ReportFcn;

//output redirection
pub use crate::io::ConfigurablePrintTarget;

pub use crate::solver::implementations::spg;
pub use crate::solver::implementations::spg::*;
