//! Traits at the boundary between the solver and user code.
//!
//! A problem is supplied to the solver as two callbacks: an [`Objective`]
//! that evaluates the function value and writes its gradient, and a
//! [`Projector`] onto the feasible set.  Both traits are implemented for
//! closures of the matching signature, so most users never implement them
//! by hand.

use super::SettingsError;
use std::io::Write;

/// Objective function with gradient.

pub trait Objective<V: ?Sized> {
    /// Return `f(x)` and overwrite `g` with the gradient of `f` at `x`.
    ///
    /// `g` has the same shape as `x`.  Neither vector may be retained beyond
    /// the call since the solver reuses them.
    fn evaluate(&mut self, x: &V, g: &mut V) -> f64;
}

impl<V, F> Objective<V> for F
where
    V: ?Sized,
    F: FnMut(&V, &mut V) -> f64,
{
    fn evaluate(&mut self, x: &V, g: &mut V) -> f64 {
        self(x, g)
    }
}

/// Euclidean projection onto a closed convex set.

pub trait Projector<V: ?Sized> {
    /// Overwrite `dst` with the projection of `src`.
    ///
    /// The projection must be idempotent, i.e. projecting a projected point
    /// returns it unchanged.  This is a precondition and is not checked.
    fn project(&mut self, dst: &mut V, src: &V);
}

impl<V, F> Projector<V> for F
where
    V: ?Sized,
    F: FnMut(&mut V, &V),
{
    fn project(&mut self, dst: &mut V, src: &V) {
        self(dst, src)
    }
}

/// Projector onto the whole space, i.e. an unconstrained problem.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoConstraints;

impl<V> Projector<V> for NoConstraints
where
    V: crate::algebra::DenseVector + ?Sized,
{
    fn project(&mut self, dst: &mut V, src: &V) {
        dst.data_mut().copy_from_slice(src.data());
    }
}

/// Solver settings.

pub trait Settings {
    /// Checks that the settings are valid.
    fn validate(&self) -> Result<(), SettingsError>;
}

/// Printing functions for the solver's Info

pub trait InfoPrint {
    type SE: Settings;

    /// Print the solver configuration, e.g. settings and problem size.
    /// `shape` is the shape of the variables and `precision` the width
    /// in bits of their elements.
    fn print_configuration(
        &self,
        out: &mut dyn Write,
        settings: &Self::SE,
        shape: &[usize],
        precision: usize,
    ) -> std::io::Result<()>;

    /// Print a header to appear at the top of progress information.
    fn print_status_header(&self, out: &mut dyn Write) -> std::io::Result<()>;

    /// Print solver progress information.   Called once per iteration.
    fn print_status(&self, out: &mut dyn Write) -> std::io::Result<()>;

    /// Print solver final status and other exit information.   Called at
    /// solver termination.
    fn print_footer(&self, out: &mut dyn Write) -> std::io::Result<()>;
}
