//! Spectral Projected Gradient method for convex constrained problems.

mod info;
mod info_print;
mod settings;
mod solution;
mod solver;
mod workspace;

#[cfg(feature = "serde")]
mod json;

//export flattened
pub use info::*;
pub use info_print::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
pub(crate) use workspace::*;
