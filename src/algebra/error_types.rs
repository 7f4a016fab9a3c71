use thiserror::Error;

/// Error type returned by vector algebra operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Two vector arguments of an operation have different shapes
    #[error("Incompatible vector shapes: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    /// A selected index is outside the range of the vector
    #[error("Index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Array dimension fields and data length are incompatible
    #[error("Shape {shape:?} is incompatible with data of length {len}")]
    BadDimensions { shape: Vec<usize>, len: usize },
}
