#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for element types stored in solver vectors.
///
/// Vector elements may be any floating point type satisfying these bounds,
/// which in practice means `f32` or `f64`.  All scalar quantities computed
/// from vectors (norms, inner products, step lengths) are reported in the
/// canonical `f64` working precision regardless of the element type.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static + Send + Sync + Float + NumAssign + Default + FromPrimitive + Display + LowerExp + Debug
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// Used internally to cast `f64` coefficients to the element type of a
/// vector before elementwise arithmetic.

// NB: `AsFloatT` is a convenience trait for f32/64 and u32/64
// so that we can do things like (2.0).as_T() everywhere on
// constants, rather than the awful T::from_f64(2.0).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: FloatT,
        {
            #[inline]
            fn as_T(&self) -> T {
                // NaN rather than a panic for values outside the range of T
                T::$ident(*self).unwrap_or_else(T::nan)
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

/// Widening of an element value to the canonical `f64` working precision.
pub trait AsF64 {
    fn as_f64(&self) -> f64;
}

impl<T: FloatT> AsF64 for T {
    #[inline]
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

#[test]
fn test_precision_casts() {
    let x: f32 = (0.25f64).as_T();
    assert_eq!(x, 0.25f32);
    assert_eq!(x.as_f64(), 0.25f64);

    let n: f64 = 3usize.as_T();
    assert_eq!(n, 3.0);
}
