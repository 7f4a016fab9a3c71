//! __spgopt__ is a Rust implementation of the Spectral Projected Gradient
//! (SPG) method for large-scale optimization problems of the form
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & f(x)\\\\\[2ex\]
//!  \text{subject to} & x \in \Omega
//!  \end{array}
//! $$
//!
//! where $f$ is continuously differentiable and $\Omega$ is a closed convex
//! set onto which the Euclidean projection is cheap to compute, e.g. a box,
//! a ball or the nonnegative orthant.
//!
//! Each iteration takes a step along the projected gradient direction using
//! the Barzilai-Borwein spectral step length, followed by a nonmonotone line
//! search in the style of Grippo, Lampariello and Lucidi.  Only the objective
//! value, its gradient and the projection are required, so the method
//! scales to problems with millions of variables.
//!
//! ## Features
//!
//! * __Generic variables__: the solver works on any type implementing
//!   [`DenseVector`](crate::algebra::DenseVector), including `Vec<f32>`,
//!   `Vec<f64>`, fixed size arrays and the n-dimensional
//!   [`DenseArray`](crate::algebra::DenseArray).  All arithmetic goes through
//!   the [`VectorMath`](crate::algebra::VectorMath) trait.
//!
//! * __Closures as callbacks__: the objective and projector may be plain
//!   closures.
//!
//! * __Configurable output__: progress reports can be sent to stdout, a
//!   file, an in-memory buffer or any `Write` stream, and the per-iteration
//!   report can be replaced.
//!
//! # Example
//!
//! ```
//! use spgopt::solver::*;
//!
//! // nonnegative least squares on a diagonal system
//! let a = [2., 1., 4.];
//! let b = [4., -3., 2.];
//!
//! let objective = move |x: &Vec<f64>, g: &mut Vec<f64>| -> f64 {
//!     let mut f = 0.;
//!     for i in 0..3 {
//!         let r = a[i] * x[i] - b[i];
//!         g[i] = a[i] * r;
//!         f += 0.5 * r * r;
//!     }
//!     f
//! };
//! let projector = |dst: &mut Vec<f64>, src: &Vec<f64>| {
//!     for (d, s) in dst.iter_mut().zip(src) {
//!         *d = s.max(0.);
//!     }
//! };
//!
//! let mut solver = SpgSolver::new(objective, projector, SpgSettings::default()).unwrap();
//! let solution = solver.solve(&vec![0.; 3]).unwrap();
//!
//! assert!(solution.is_converged());
//! assert!((solution.x[0] - 2.).abs() < 1e-6);
//! assert_eq!(solution.x[1], 0.);
//! assert!((solution.x[2] - 0.5).abs() < 1e-6);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub mod timers;

