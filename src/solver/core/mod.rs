// package together all of the following and re-export
// in a partially flattened structure :
// : core traits at the user boundary (objective, projector, settings)
// : solver status and error types
// : progress reporting callbacks

pub mod callbacks;
pub mod traits;

//partially flatten top level pieces

mod settings;
mod solver;
pub use settings::*;
pub use solver::*;
