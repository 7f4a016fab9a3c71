//! Generic vector algebra.
//!
//! All solver arithmetic goes through the [`VectorMath`] trait, which is
//! implemented for every [`DenseVector`]: slices, `Vec`, fixed size arrays
//! and the n-dimensional [`DenseArray`].  Scalars (norms, inner products,
//! coefficients) are `f64` for every element type.
//!
//! Binary and ternary operations check that their operands have identical
//! shapes and fail with [`VectorError::ShapeMismatch`] otherwise.  None of
//! the operations allocate.
//!
//! ```
//! use spgopt::algebra::*;
//!
//! let x = vec![3., 0., 2., 1.];
//! let mut y = vec![-1., -2., 3., 4.];
//! assert_eq!(x.inner(&y).unwrap(), 7.);
//!
//! // y = y + 2x
//! y.update(2., &x).unwrap();
//! assert_eq!(y, vec![5., -2., 7., 6.]);
//! ```

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod vecmath;
mod vector_traits;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use vector_traits::*;

#[cfg(test)]
mod tests;
