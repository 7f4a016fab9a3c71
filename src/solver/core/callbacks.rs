// ---------------------------------
// enum for managing progress reporting callbacks
// ---------------------------------

use std::io::Write;

/// Signature of a user progress reporting function.  It receives the
/// solver's print target and the current solver info.
pub type ReportFcn<I> = dyn FnMut(&mut dyn Write, &I) -> std::io::Result<()> + Send;

#[derive(Default)]
pub(crate) enum ReportCallback<I> {
    /// use the solver's tabular progress printer
    #[default]
    Default,
    Rust(Box<ReportFcn<I>>),
}

impl<I> std::fmt::Debug for ReportCallback<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCallback::Default => write!(f, "ReportCallback::Default"),
            ReportCallback::Rust(_) => write!(f, "ReportCallback::Rust"),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SolverCallbacks<I> {
    /// callback for per-iteration progress reports
    pub report_callback: ReportCallback<I>,
}

impl<I> SolverCallbacks<I> {
    /// Call the report function, falling back to `default`
    /// when no user function is set
    pub(crate) fn report(
        &mut self,
        out: &mut dyn Write,
        info: &I,
        default: impl FnOnce(&mut dyn Write, &I) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        match self.report_callback {
            ReportCallback::Default => default(out, info),
            ReportCallback::Rust(ref mut f) => f(out, info),
        }
    }
}
