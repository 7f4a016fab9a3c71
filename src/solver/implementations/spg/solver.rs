use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::solver::core::{
    callbacks::{ReportCallback, SolverCallbacks},
    traits::{InfoPrint, Objective, Projector, Settings},
    SolverError, SolverStatus,
};
use crate::timers::*;
use std::io::Write;
use std::marker::PhantomData;

// sufficient decrease parameter of the line search
const FTOL: f64 = 1e-4;
// safeguards on the spectral step length
const LAMBDA_MIN: f64 = 1e-30;
const LAMBDA_MAX: f64 = 1e30;
// safeguards on the quadratic interpolation step
const AMIN: f64 = 0.1;
const AMAX: f64 = 0.9;

/// Spectral Projected Gradient solver.
///
/// Minimizes a smooth function over a closed convex set, given a function
/// returning the objective value and gradient and the Euclidean projection
/// onto the set.  Steps use the Barzilai-Borwein spectral length with a
/// nonmonotone line search over the last [`mem`](SpgSettings::mem)
/// objective values.
///
/// ```
/// use spgopt::solver::*;
///
/// // minimize (x0 - 3)^2 + (x1 + 1)^2 subject to x >= 0
/// let objective = |x: &Vec<f64>, g: &mut Vec<f64>| -> f64 {
///     g[0] = 2. * (x[0] - 3.);
///     g[1] = 2. * (x[1] + 1.);
///     (x[0] - 3.).powi(2) + (x[1] + 1.).powi(2)
/// };
/// let projector = |dst: &mut Vec<f64>, src: &Vec<f64>| {
///     for (d, s) in dst.iter_mut().zip(src) {
///         *d = s.max(0.);
///     }
/// };
///
/// let settings = SpgSettings::default();
/// let mut solver = SpgSolver::new(objective, projector, settings).unwrap();
/// let solution = solver.solve(&vec![1., 1.]).unwrap();
///
/// assert_eq!(solution.info.status, SolverStatus::ConvergedInfNorm);
/// assert!((solution.x[0] - 3.).abs() < 1e-6);
/// assert_eq!(solution.x[1], 0.);
/// ```

pub struct SpgSolver<V, F, P> {
    objective: F,
    projector: P,
    /// solver settings.  Checked again at the start of every solve
    pub settings: SpgSettings,
    /// information from the most recent solve
    pub info: SpgInfo,
    pub(crate) callbacks: SolverCallbacks<SpgInfo>,
    pub(crate) stream: PrintTarget,
    timers: Option<Timers>,
    phantom: PhantomData<fn(&V)>,
}

impl<V, F, P> std::fmt::Debug for SpgSolver<V, F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpgSolver")
            .field("settings", &self.settings)
            .field("info", &self.info)
            .field("callbacks", &self.callbacks)
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

impl<V, F, P> SpgSolver<V, F, P>
where
    V: DenseVector + Clone,
    F: Objective<V>,
    P: Projector<V>,
{
    /// Create a solver for the problem defined by `objective` and
    /// `projector`.  Fails if the settings are out of range.
    pub fn new(objective: F, projector: P, settings: SpgSettings) -> Result<Self, SolverError> {
        settings.validate()?;

        Ok(Self {
            objective,
            projector,
            settings,
            info: SpgInfo::default(),
            callbacks: SolverCallbacks::default(),
            stream: PrintTarget::default(),
            timers: Some(Timers::default()),
            phantom: PhantomData,
        })
    }

    /// Run the solver from `x0`, returning the best point found and the
    /// final solver information.
    pub fn solve(&mut self, x0: &V) -> Result<SpgSolution<V>, SolverError> {
        let mut x = x0.clone();
        let info = self.solve_in_place(&mut x)?;
        Ok(SpgSolution { x, info })
    }

    /// Run the solver from `x`, overwriting it with the best point found.
    ///
    /// On error `x` also holds the best point evaluated before the failure,
    /// unless a user callback changed its shape.  If the failure happens
    /// before the starting point is evaluated, `x` is left as given.
    pub fn solve_in_place(&mut self, x: &mut V) -> Result<SpgInfo, SolverError> {
        self.settings.validate()?;

        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();

        let mut work = SpgWorkspace::new(x, self.settings.mem);

        self.info.reset(&mut timers);

        if self.settings.verbose {
            let precision = 8 * std::mem::size_of::<V::T>();
            self.info.print_configuration(
                &mut self.stream,
                &self.settings,
                &x.shape(),
                precision,
            )?;
        }

        let result;
        timeit! {timers => "solve"; {
            result = self.iterate(x, &mut work, &mut timers);
        }}
        self.info.finalize(&timers);
        self.timers.replace(timers);

        if let Err(e) = result {
            // leave the best point found so far in x, when its shape
            // still allows it
            x.copy_from(&work.xbest).ok();
            return Err(e);
        }

        x.copy_from(&work.xbest)?;

        if self.settings.verbose {
            self.info.print_footer(&mut self.stream)?;
        }

        Ok(self.info.clone())
    }

    /// Replace the default per-iteration progress report.  The callback is
    /// only invoked when [`verbose`](SpgSettings::verbose) is set.
    pub fn set_report_callback<C>(&mut self, callback: C)
    where
        C: FnMut(&mut dyn Write, &SpgInfo) -> std::io::Result<()> + Send + 'static,
    {
        self.callbacks.report_callback = ReportCallback::Rust(Box::new(callback));
    }

    /// Restore the default per-iteration progress report
    pub fn unset_report_callback(&mut self) {
        self.callbacks.report_callback = ReportCallback::Default;
    }

    // ---------------------------------
    // main loop
    // ---------------------------------

    fn iterate(
        &mut self,
        x: &mut V,
        work: &mut SpgWorkspace<V>,
        timers: &mut Timers,
    ) -> Result<(), SolverError> {
        let eta = self.settings.eta;
        let mut iter: u32 = 0;

        // start from the projection of the initial point
        work.s.copy_from(x)?;
        self.project(x, &work.s)?;
        self.evaluate(x, &mut work.g)?;
        work.xbest.copy_from(x)?;

        loop {
            // projected gradient pg = (x - P(x - eta*g))/eta
            work.s.combine2(1.0, x, -eta, &work.g)?;
            self.project(&mut work.pg, &work.s)?;
            work.pg.combine_in_place(-1.0 / eta, 1.0 / eta, x)?;

            let pgnorminf = work.pg.norm_inf();
            self.info.save_pgnorms(pgnorminf, work.pg.norm2());
            self.info.iterations = iter;

            if self.settings.verbose {
                notimeit! {timers; {
                    self.callbacks
                        .report(&mut self.stream, &self.info, default_report)?;
                }}
            }

            if let Some(status) = self.check_termination() {
                self.info.status = status;
                return Ok(());
            }

            let f = self.info.f;
            let fmax = work.update_fmax(iter, f);

            // spectral step length
            let lambda = if iter == 0 {
                (1.0 / pgnorminf).clamp(LAMBDA_MIN, LAMBDA_MAX)
            } else {
                work.s.combine2(1.0, x, -1.0, &work.x_prev)?;
                work.y.combine2(1.0, &work.g, -1.0, &work.g_prev)?;
                let sty = work.s.inner(&work.y)?;
                if sty > 0.0 {
                    (work.s.sumsq() / sty).clamp(LAMBDA_MIN, LAMBDA_MAX)
                } else {
                    LAMBDA_MAX
                }
            };

            work.x_prev.copy_from(x)?;
            work.g_prev.copy_from(&work.g)?;
            let f_prev = f;

            // search direction d = P(x - lambda*g) - x
            work.d.combine2(1.0, &work.x_prev, -lambda, &work.g_prev)?;
            self.project(x, &work.d)?;
            work.d.combine2(1.0, x, -1.0, &work.x_prev)?;
            let delta = work.g_prev.inner(&work.d)?;

            // nonmonotone line search along x_prev + stp*d
            let mut stp = 1.0;
            let f = loop {
                if self.evaluate(x, &mut work.g)? {
                    work.xbest.copy_from(x)?;
                }
                let f = self.info.f;

                if f <= fmax + stp * FTOL * delta {
                    break f;
                }
                if self.info.evaluations >= self.settings.maxfc {
                    self.info.status = SolverStatus::MaxEvaluations;
                    return Ok(());
                }

                // safeguarded quadratic interpolation
                let q = -delta * stp * stp;
                let r = 2.0 * (f - f_prev - stp * delta);
                stp = if r > 0.0 && AMIN * r <= q && q <= AMAX * stp * r {
                    q / r
                } else {
                    stp / 2.0
                };

                x.combine2(1.0, &work.x_prev, stp, &work.d)?;
            };

            if (f - f_prev).abs() < self.settings.eps3 * f.abs().max(f_prev.abs()) {
                self.info.status = SolverStatus::Stagnation;
                return Ok(());
            }

            iter += 1;
        }
    }

    fn check_termination(&self) -> Option<SolverStatus> {
        let (info, settings) = (&self.info, &self.settings);

        if info.pgnorminf <= settings.eps1 {
            Some(SolverStatus::ConvergedInfNorm)
        } else if info.pgnorm2 <= settings.eps2 {
            Some(SolverStatus::ConvergedTwoNorm)
        } else if info.iterations >= settings.maxit {
            Some(SolverStatus::MaxIterations)
        } else if info.evaluations >= settings.maxfc {
            Some(SolverStatus::MaxEvaluations)
        } else {
            None
        }
    }

    // evaluate the objective at x, returning true if it is the
    // best value seen so far
    fn evaluate(&mut self, x: &V, g: &mut V) -> Result<bool, SolverError> {
        let f = self.objective.evaluate(x, g);
        x.check_compatible(g)?;
        Ok(self.info.record_evaluation(f))
    }

    fn project(&mut self, dst: &mut V, src: &V) -> Result<(), SolverError> {
        self.projector.project(dst, src);
        self.info.record_projection();
        src.check_compatible(dst)?;
        Ok(())
    }
}

impl<V, F, P> ConfigurablePrintTarget for SpgSolver<V, F, P> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
