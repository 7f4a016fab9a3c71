use super::{AsF64, AsFloatT, DenseVector, FloatT, VectorError, VectorMath};
use itertools::izip;
use num_traits::{Float, Zero};
use std::iter::zip;

impl<V> VectorMath for V
where
    V: DenseVector + ?Sized,
{
    fn norm2(&self) -> f64 {
        let x = self.data();
        accumulate_pairwise(x.len(), &|i| x[i] * x[i]).sqrt().as_f64()
    }

    fn norm1(&self) -> f64 {
        let x = self.data();
        accumulate_pairwise(x.len(), &|i| x[i].abs()).as_f64()
    }

    fn norm_inf(&self) -> f64 {
        let mut out = V::T::zero();
        for v in self.data().iter().map(|v| v.abs()) {
            if v.is_nan() {
                return f64::NAN;
            }
            out = if v > out { v } else { out };
        }
        out.as_f64()
    }

    fn sumsq(&self) -> f64 {
        let x = self.data();
        accumulate_pairwise(x.len(), &|i| x[i] * x[i]).as_f64()
    }

    fn inner(&self, y: &Self) -> Result<f64, VectorError> {
        self.check_compatible(y)?;
        let (x, y) = (self.data(), y.data());
        Ok(accumulate_pairwise(x.len(), &|i| x[i] * y[i]).as_f64())
    }

    fn inner_weighted(&self, x: &Self, y: &Self) -> Result<f64, VectorError> {
        self.check_compatible(x)?;
        self.check_compatible(y)?;
        let (w, x, y) = (self.data(), x.data(), y.data());
        Ok(accumulate_pairwise(w.len(), &|i| w[i] * x[i] * y[i]).as_f64())
    }

    fn inner_selected(&self, sel: &[usize], y: &Self) -> Result<f64, VectorError> {
        self.check_compatible(y)?;
        let (x, y) = (self.data(), y.data());
        check_selection(sel, x.len())?;
        Ok(accumulate_pairwise(sel.len(), &|k| x[sel[k]] * y[sel[k]]).as_f64())
    }

    fn swap_with(&mut self, y: &mut Self) -> Result<(), VectorError> {
        self.check_compatible(y)?;
        self.data_mut().swap_with_slice(y.data_mut());
        Ok(())
    }

    fn set(&mut self, c: f64) -> &mut Self {
        let c: V::T = c.as_T();
        self.data_mut().iter_mut().for_each(|x| *x = c);
        self
    }

    fn zero(&mut self) -> &mut Self {
        self.data_mut().iter_mut().for_each(|x| *x = V::T::zero());
        self
    }

    fn copy_from(&mut self, src: &Self) -> Result<(), VectorError> {
        self.check_compatible(src)?;
        self.data_mut().copy_from_slice(src.data());
        Ok(())
    }

    fn scale(&mut self, a: f64, x: &Self) -> Result<(), VectorError> {
        self.combine(a, x)
    }

    fn update(&mut self, a: f64, x: &Self) -> Result<(), VectorError> {
        self.check_compatible(x)?;
        if a == 0.0 {
            return Ok(());
        }
        let dst = self.data_mut();
        let x = x.data();
        if a == 1.0 {
            zip(dst, x).for_each(|(d, &x)| *d += x);
        } else if a == -1.0 {
            zip(dst, x).for_each(|(d, &x)| *d -= x);
        } else {
            let α: V::T = a.as_T();
            zip(dst, x).for_each(|(d, &x)| *d += α * x);
        }
        Ok(())
    }

    fn update_selected(&mut self, sel: &[usize], a: f64, x: &Self) -> Result<(), VectorError> {
        self.check_compatible(x)?;
        check_selection(sel, x.numel())?;
        if a == 0.0 {
            return Ok(());
        }
        let dst = self.data_mut();
        let x = x.data();
        if a == 1.0 {
            sel.iter().for_each(|&i| dst[i] += x[i]);
        } else if a == -1.0 {
            sel.iter().for_each(|&i| dst[i] -= x[i]);
        } else {
            let α: V::T = a.as_T();
            sel.iter().for_each(|&i| dst[i] += α * x[i]);
        }
        Ok(())
    }

    fn combine(&mut self, a: f64, x: &Self) -> Result<(), VectorError> {
        self.check_compatible(x)?;
        if a == 0.0 {
            self.zero();
            return Ok(());
        }
        let dst = self.data_mut();
        let x = x.data();
        if a == 1.0 {
            dst.copy_from_slice(x);
        } else if a == -1.0 {
            zip(dst, x).for_each(|(d, &x)| *d = -x);
        } else {
            let α: V::T = a.as_T();
            zip(dst, x).for_each(|(d, &x)| *d = α * x);
        }
        Ok(())
    }

    fn combine2(&mut self, a: f64, x: &Self, b: f64, y: &Self) -> Result<(), VectorError> {
        self.check_compatible(x)?;
        self.check_compatible(y)?;
        if a == 0.0 {
            return self.combine(b, y);
        }
        if b == 0.0 {
            return self.combine(a, x);
        }

        let α: V::T = a.as_T();
        let β: V::T = b.as_T();
        let iter = izip!(self.data_mut(), x.data(), y.data());

        match (Coefficient::of(a), Coefficient::of(b)) {
            (Coefficient::One, Coefficient::One) => iter.for_each(|(w, &x, &y)| *w = x + y),
            (Coefficient::One, Coefficient::MinusOne) => iter.for_each(|(w, &x, &y)| *w = x - y),
            (Coefficient::One, Coefficient::Other) => iter.for_each(|(w, &x, &y)| *w = x + β * y),
            (Coefficient::MinusOne, Coefficient::One) => iter.for_each(|(w, &x, &y)| *w = y - x),
            (Coefficient::MinusOne, Coefficient::MinusOne) => {
                iter.for_each(|(w, &x, &y)| *w = -x - y)
            }
            (Coefficient::MinusOne, Coefficient::Other) => {
                iter.for_each(|(w, &x, &y)| *w = β * y - x)
            }
            (Coefficient::Other, Coefficient::One) => iter.for_each(|(w, &x, &y)| *w = α * x + y),
            (Coefficient::Other, Coefficient::MinusOne) => {
                iter.for_each(|(w, &x, &y)| *w = α * x - y)
            }
            (Coefficient::Other, Coefficient::Other) => {
                iter.for_each(|(w, &x, &y)| *w = α * x + β * y)
            }
        }
        Ok(())
    }

    fn combine_in_place(&mut self, a: f64, b: f64, y: &Self) -> Result<(), VectorError> {
        self.check_compatible(y)?;
        if a == 0.0 {
            return self.combine(b, y);
        }
        if a == 1.0 {
            return self.update(b, y);
        }

        let α: V::T = a.as_T();
        let β: V::T = b.as_T();
        let dst = self.data_mut();

        if b == 0.0 {
            if a == -1.0 {
                dst.iter_mut().for_each(|w| *w = -*w);
            } else {
                dst.iter_mut().for_each(|w| *w *= α);
            }
            return Ok(());
        }

        let iter = zip(dst, y.data());
        match (Coefficient::of(a), Coefficient::of(b)) {
            (Coefficient::MinusOne, Coefficient::One) => iter.for_each(|(w, &y)| *w = y - *w),
            (Coefficient::MinusOne, Coefficient::MinusOne) => {
                iter.for_each(|(w, &y)| *w = -*w - y)
            }
            (Coefficient::MinusOne, Coefficient::Other) => {
                iter.for_each(|(w, &y)| *w = β * y - *w)
            }
            (_, Coefficient::One) => iter.for_each(|(w, &y)| *w = α * *w + y),
            (_, Coefficient::MinusOne) => iter.for_each(|(w, &y)| *w = α * *w - y),
            (_, Coefficient::Other) => iter.for_each(|(w, &y)| *w = α * *w + β * y),
        }
        Ok(())
    }

    fn product(&mut self, x: &Self, y: &Self) -> Result<(), VectorError> {
        self.check_compatible(x)?;
        self.check_compatible(y)?;
        for (w, &x, &y) in izip!(self.data_mut(), x.data(), y.data()) {
            *w = x * y;
        }
        Ok(())
    }

    fn is_finite(&self) -> bool {
        self.data().iter().all(|&x| x.is_finite())
    }

    // max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, y: &Self) -> Result<f64, VectorError> {
        self.check_compatible(y)?;
        let out = zip(self.data(), y.data())
            .fold(V::T::zero(), |acc, (&x, &y)| V::T::max(acc, (x - y).abs()));
        Ok(out.as_f64())
    }
}

// classification of a nonzero coefficient for the
// unscaled add/subtract branches
#[derive(Clone, Copy)]
enum Coefficient {
    One,
    MinusOne,
    Other,
}

impl Coefficient {
    fn of(a: f64) -> Self {
        if a == 1.0 {
            Coefficient::One
        } else if a == -1.0 {
            Coefficient::MinusOne
        } else {
            Coefficient::Other
        }
    }
}

fn check_selection(sel: &[usize], len: usize) -> Result<(), VectorError> {
    match sel.iter().find(|&&i| i >= len) {
        Some(&index) => Err(VectorError::IndexOutOfBounds { index, len }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------
// generic pairwise accumulator utility for sums, dot products etc.
// `op(i)` produces the i-th term of the sum.

fn accumulate_pairwise<T, F>(n: usize, op: &F) -> T
where
    T: FloatT,
    F: Fn(usize) -> T,
{
    const BASE_CASE_DIM: usize = 16;

    return accumulate_pairwise_inner(op, 0, n);

    fn accumulate_pairwise_inner<T, F>(op: &F, i1: usize, n: usize) -> T
    where
        T: FloatT,
        F: Fn(usize) -> T,
    {
        if n < BASE_CASE_DIM {
            (i1..i1 + n).fold(T::zero(), |acc, i| acc + op(i))
        } else {
            let n2 = n / 2;
            accumulate_pairwise_inner(op, i1, n2) + accumulate_pairwise_inner(op, i1 + n2, n - n2)
        }
    }
}

#[test]
fn test_pairwise_sum_f32() {
    //summing a huge number of f32s is inaccurate for
    //naive summation, but the pairwise method should still work
    let n = 10000000usize;
    let x = vec![1.5f32; n];
    assert_eq!(x.norm1(), 1.5 * n as f64);

    let naive = x.iter().fold(0.0f32, |acc, &z| acc + z) as f64;
    assert!((naive - 1.5 * n as f64).abs() > 1e5);
}

#[test]
fn test_inner_awkward_lengths() {
    let maxlen = 128 * 7 + 1; //awkward length to test base case
    let x: Vec<f64> = (1..=maxlen).map(|x| x as f64).collect();
    let y: Vec<f64> = (1..=maxlen).map(|y| (y as f64 - 3.0) / 2.0).collect();

    for i in 0..=x.len() {
        let xt = &x[0..i];
        let yt = &y[0..i];
        let dot1 = zip(xt, yt).fold(0.0, |acc, (&x, &y)| acc + x * y);
        let dot2 = xt.inner(yt).unwrap();
        assert!((dot1 - dot2).abs() <= 1e-12 * dot1.abs().max(1.0));
    }
}
