use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Owned n-dimensional array of floats in column major format.
///
/// This is the container to use when the rank of the variables matters,
/// e.g. for images or volumes.  Algebra operations between two arrays
/// require identical per-axis extents.
///
/// # Example
/// ```
/// use spgopt::algebra::*;
///
/// let mut a = DenseArray::<f64>::zeros(&[2, 3]);
/// a[[1, 2]] = 5.0;
/// assert_eq!(a.data()[5], 5.0);
/// assert_eq!(a.norm_inf(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DenseArrayFields<T>"))]
pub struct DenseArray<T> {
    /// per-axis extents
    dims: Vec<usize>,
    /// vector of data in column major format
    data: Vec<T>,
}

// unchecked form of a serialized array.  Deserialization goes
// through here so that the shape is checked against the data.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DenseArrayFields<T> {
    dims: Vec<usize>,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<DenseArrayFields<T>> for DenseArray<T> {
    type Error = VectorError;

    fn try_from(fields: DenseArrayFields<T>) -> Result<Self, Self::Error> {
        check_dims(&fields.dims, fields.data.len())?;
        Ok(Self {
            dims: fields.dims,
            data: fields.data,
        })
    }
}

fn check_dims(dims: &[usize], len: usize) -> Result<(), VectorError> {
    if dims.iter().product::<usize>() != len {
        return Err(VectorError::BadDimensions {
            shape: dims.to_vec(),
            len,
        });
    }
    Ok(())
}

impl<T> DenseArray<T>
where
    T: FloatT,
{
    /// Array of the given shape filled with zeros
    pub fn zeros(dims: &[usize]) -> Self {
        Self::filled(dims, T::zero())
    }

    /// Array of the given shape with all elements set to `c`
    pub fn filled(dims: &[usize], c: T) -> Self {
        let n = dims.iter().product();
        Self {
            dims: dims.to_vec(),
            data: vec![c; n],
        }
    }

    /// Wrap existing column major data.  Fails if the number of
    /// elements implied by `dims` differs from `data.len()`
    pub fn new(dims: &[usize], data: Vec<T>) -> Result<Self, VectorError> {
        check_dims(dims, data.len())?;
        Ok(Self {
            dims: dims.to_vec(),
            data,
        })
    }

    /// Number of axes
    pub fn ndims(&self) -> usize {
        self.dims.len()
    }

    /// Extent of axis `k`
    pub fn dim(&self, k: usize) -> usize {
        self.dims[k]
    }

    /// Same data viewed with a different shape of equal length
    pub fn reshape(mut self, dims: &[usize]) -> Result<Self, VectorError> {
        check_dims(dims, self.data.len())?;
        self.dims = dims.to_vec();
        Ok(self)
    }

    /// Consume the array and return its column major data
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Linear (storage) index of a multi-index
    pub fn index_linear(&self, idx: &[usize]) -> usize {
        assert_eq!(idx.len(), self.dims.len());
        let mut lidx = 0;
        let mut stride = 1;
        for (&i, &n) in idx.iter().zip(self.dims.iter()) {
            assert!(i < n);
            lidx += i * stride;
            stride *= n;
        }
        lidx
    }
}

impl<T: FloatT> DenseVector for DenseArray<T> {
    type T = T;
    fn shape(&self) -> Vec<usize> {
        self.dims.clone()
    }
    fn data(&self) -> &[T] {
        &self.data
    }
    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: FloatT, const N: usize> Index<[usize; N]> for DenseArray<T> {
    type Output = T;
    fn index(&self, idx: [usize; N]) -> &T {
        let lidx = self.index_linear(&idx);
        &self.data[lidx]
    }
}

impl<T: FloatT, const N: usize> IndexMut<[usize; N]> for DenseArray<T> {
    fn index_mut(&mut self, idx: [usize; N]) -> &mut T {
        let lidx = self.index_linear(&idx);
        &mut self.data[lidx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_indexing() {
        let a = DenseArray::new(&[2, 3], vec![1., 2., 3., 4., 5., 6.]).unwrap();
        assert_eq!(a[[0, 0]], 1.);
        assert_eq!(a[[1, 0]], 2.);
        assert_eq!(a[[0, 1]], 3.);
        assert_eq!(a[[1, 2]], 6.);
        assert_eq!(a.ndims(), 2);
        assert_eq!(a.dim(1), 3);
    }

    #[test]
    fn bad_dimensions() {
        let a = DenseArray::new(&[2, 2], vec![1., 2., 3.]);
        assert!(matches!(a, Err(VectorError::BadDimensions { len: 3, .. })));

        let b = DenseArray::<f32>::zeros(&[6]).reshape(&[4, 2]);
        assert!(b.is_err());
    }

    #[test]
    fn rank_matters_for_compatibility() {
        let a = DenseArray::<f64>::zeros(&[2, 3]);
        let b = DenseArray::<f64>::zeros(&[3, 2]);
        let c = DenseArray::<f64>::zeros(&[6]);
        assert!(!a.is_compatible(&b));
        assert!(!a.is_compatible(&c));
        assert!(a.is_compatible(&b.reshape(&[2, 3]).unwrap()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_dimensions() {
        let a: DenseArray<f64> =
            serde_json::from_str(r#"{"dims":[2,2],"data":[1,2,3,4]}"#).unwrap();
        assert_eq!(a[[1, 1]], 4.);

        let b = serde_json::from_str::<DenseArray<f64>>(r#"{"dims":[2,2],"data":[1,2,3]}"#);
        assert!(b.is_err());
    }
}
