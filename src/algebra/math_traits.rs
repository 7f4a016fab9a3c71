use super::VectorError;

// All vector arithmetic used by the solver goes through this trait,
// which is implemented generically for every DenseVector.

/// Vector operations on any [`DenseVector`](crate::algebra::DenseVector).
///
/// Scalar results and scalar coefficients are always `f64`.  Reductions
/// accumulate in the element type of the vector and are widened on return.
///
/// Coefficients equal to `0`, `1` and `-1` are handled by explicit branches.
/// A zero coefficient guarantees that the elements of the corresponding
/// source vector are never read, so the source may hold garbage (e.g. NaN).
/// Shapes are still checked.
pub trait VectorMath {
    /// Euclidean norm
    fn norm2(&self) -> f64;

    /// One norm
    fn norm1(&self) -> f64;

    /// Infinity norm.  Returns NaN if any element is NaN.
    fn norm_inf(&self) -> f64;

    /// Sum of squares of the elements.
    fn sumsq(&self) -> f64;

    /// Inner product `Σ self[i]*y[i]`
    fn inner(&self, y: &Self) -> Result<f64, VectorError>;

    /// Weighted inner product `Σ self[i]*x[i]*y[i]`, with `self` the weights
    fn inner_weighted(&self, x: &Self, y: &Self) -> Result<f64, VectorError>;

    /// Inner product restricted to the (0-based, linear) indices in `sel`,
    /// taken in the given order.
    fn inner_selected(&self, sel: &[usize], y: &Self) -> Result<f64, VectorError>;

    /// Exchange the contents of `self` and `y`
    fn swap_with(&mut self, y: &mut Self) -> Result<(), VectorError>;

    /// Set all elements to the same value
    fn set(&mut self, c: f64) -> &mut Self;

    /// Set all elements to zero
    fn zero(&mut self) -> &mut Self;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> Result<(), VectorError>;

    /// `self = a*x`.   Same as [`combine`](VectorMath::combine), kept
    /// as the natural name for a scaled copy.
    fn scale(&mut self, a: f64, x: &Self) -> Result<(), VectorError>;

    /// BLAS-like update in place.  Produces `self = self + a*x`
    fn update(&mut self, a: f64, x: &Self) -> Result<(), VectorError>;

    /// Update restricted to the (0-based, linear) indices in `sel`.
    /// Produces `self[i] = self[i] + a*x[i]` for `i` in `sel`
    fn update_selected(&mut self, sel: &[usize], a: f64, x: &Self) -> Result<(), VectorError>;

    /// Produces `self = a*x`
    fn combine(&mut self, a: f64, x: &Self) -> Result<(), VectorError>;

    /// Produces `self = a*x + b*y`
    fn combine2(&mut self, a: f64, x: &Self, b: f64, y: &Self) -> Result<(), VectorError>;

    /// In-place linear combination.  Produces `self = a*self + b*y`.
    ///
    /// This is the aliased form of `combine2` with the destination as the
    /// first source, e.g. advancing an iterate along a search direction
    /// with `x.combine_in_place(1.0, stp, &d)`.
    fn combine_in_place(&mut self, a: f64, b: f64, y: &Self) -> Result<(), VectorError>;

    /// Elementwise product.  Produces `self[i] = x[i]*y[i]`
    fn product(&mut self, x: &Self, y: &Self) -> Result<(), VectorError>;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;

    /// Max absolute elementwise difference between `self` and `y`
    fn norm_inf_diff(&self, y: &Self) -> Result<f64, VectorError>;
}
