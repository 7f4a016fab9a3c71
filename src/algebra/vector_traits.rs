use super::{FloatT, VectorError};

/// Fixed-shape, contiguous container of real scalars.
///
/// This is the "vector" of the solver: any container whose elements can be
/// read and written through a flat slice, together with a shape given as the
/// list of per-axis extents.  Two vectors are compatible when their shapes
/// are equal, so a 2x3 array and a 3x2 array are *not* compatible even though
/// they hold the same number of elements.
///
/// Implementations are provided for `[T]` and `Vec<T>` (rank 1) and for the
/// n-dimensional [`DenseArray`](crate::algebra::DenseArray).
pub trait DenseVector {
    type T: FloatT;

    /// per-axis extents
    fn shape(&self) -> Vec<usize>;

    /// elements in storage order
    fn data(&self) -> &[Self::T];

    /// elements in storage order (mutable)
    fn data_mut(&mut self) -> &mut [Self::T];

    /// total number of elements
    fn numel(&self) -> usize {
        self.data().len()
    }

    /// `true` if `self` and `other` have identical shapes
    fn is_compatible<V>(&self, other: &V) -> bool
    where
        V: DenseVector + ?Sized,
    {
        // cheap length test first, shapes allocate
        self.numel() == other.numel() && self.shape() == other.shape()
    }

    /// `Ok` if `self` and `other` have identical shapes, otherwise
    /// a [`ShapeMismatch`](VectorError::ShapeMismatch) error
    fn check_compatible<V>(&self, other: &V) -> Result<(), VectorError>
    where
        V: DenseVector + ?Sized,
    {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(VectorError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            })
        }
    }
}

impl<T: FloatT> DenseVector for [T] {
    type T = T;
    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }
    fn data(&self) -> &[T] {
        self
    }
    fn data_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: FloatT> DenseVector for Vec<T> {
    type T = T;
    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }
    fn data(&self) -> &[T] {
        self
    }
    fn data_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: FloatT, const N: usize> DenseVector for [T; N] {
    type T = T;
    fn shape(&self) -> Vec<usize> {
        vec![N]
    }
    fn data(&self) -> &[T] {
        self
    }
    fn data_mut(&mut self) -> &mut [T] {
        self
    }
}
