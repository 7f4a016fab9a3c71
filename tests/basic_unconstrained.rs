use spgopt::{algebra::*, solver::*};

fn square(x: &Vec<f64>, g: &mut Vec<f64>) -> f64 {
    g[0] = 2. * x[0];
    x[0] * x[0]
}

// f(x) = 1/2 sum_i d_i x_i^2 with d_i = i + 1
fn diagonal_quadratic(x: &Vec<f64>, g: &mut Vec<f64>) -> f64 {
    let mut f = 0.;
    for (i, (gi, xi)) in g.iter_mut().zip(x).enumerate() {
        let d = (i + 1) as f64;
        *gi = d * xi;
        f += 0.5 * d * xi * xi;
    }
    f
}

#[test]
fn test_unconstrained_square() {
    let settings = SpgSettings::default();
    let mut solver = SpgSolver::new(square, NoConstraints, settings).unwrap();

    let solution = solver.solve(&vec![10.]).unwrap();

    assert_eq!(solution.info.status, SolverStatus::ConvergedInfNorm);
    assert!(solution.x[0].abs() <= 1e-6);
    assert!(solution.objective() <= 1e-12);
}

#[test]
fn test_unconstrained_square_counters() {
    // the second spectral step lands exactly on the minimizer:
    // x = 10 -> 9 -> 0, with one projection for the starting point and
    // two per iteration
    let settings = SpgSettings::default();
    let mut solver = SpgSolver::new(square, NoConstraints, settings).unwrap();

    let solution = solver.solve(&vec![10.]).unwrap();
    let info = &solution.info;

    assert_eq!(solution.x, vec![0.]);
    assert_eq!(info.status, SolverStatus::ConvergedInfNorm);
    assert_eq!(info.iterations, 2);
    assert_eq!(info.evaluations, 3);
    assert_eq!(info.projections, 6);
    assert_eq!(info.f, 0.);
    assert_eq!(info.fbest, 0.);
    assert_eq!(info.pgnorminf, 0.);
    assert_eq!(info.pgnorm2, 0.);
    assert!(info.solve_time >= 0.);
}

#[test]
fn test_unconstrained_two_norm_stop() {
    // disable the infinity norm test so the 2-norm test ends the run
    let settings = SpgSettingsBuilder::default().eps1(0.).build().unwrap();
    let mut solver = SpgSolver::new(diagonal_quadratic, NoConstraints, settings).unwrap();

    let solution = solver.solve(&vec![1.; 5]).unwrap();

    assert_eq!(solution.info.status, SolverStatus::ConvergedTwoNorm);
    assert!(solution.info.pgnorm2 <= 1e-6);
    assert!(solution.x.norm_inf() <= 1e-5);
}

#[test]
fn test_unconstrained_solve_in_place() {
    let settings = SpgSettings::default();
    let mut solver = SpgSolver::new(diagonal_quadratic, NoConstraints, settings).unwrap();

    let mut x = vec![-3., 2., 1., 0.5];
    let info = solver.solve_in_place(&mut x).unwrap();

    assert!(info.status.is_converged());
    assert_eq!(info, solver.info);
    assert!(x.norm_inf() <= 1e-5);
    assert_eq!(diagonal_quadratic(&x, &mut vec![0.; 4]), info.fbest);
}

#[test]
fn test_unconstrained_repeat_solve() {
    // a second run starts from fresh counters
    let settings = SpgSettings::default();
    let mut solver = SpgSolver::new(square, NoConstraints, settings).unwrap();

    let first = solver.solve(&vec![10.]).unwrap();
    let second = solver.solve(&vec![10.]).unwrap();

    assert_eq!(first.x, second.x);
    assert_eq!(first.info.iterations, second.info.iterations);
    assert_eq!(first.info.evaluations, second.info.evaluations);
    assert_eq!(first.info.projections, second.info.projections);
}

#[test]
fn test_unconstrained_f32() {
    let objective = |x: &Vec<f32>, g: &mut Vec<f32>| -> f64 {
        let mut f = 0.;
        for (i, (gi, &xi)) in g.iter_mut().zip(x).enumerate() {
            let d = (i + 1) as f32;
            *gi = d * (xi - 1.);
            f += 0.5 * (d * (xi - 1.) * (xi - 1.)) as f64;
        }
        f
    };

    let settings = SpgSettingsBuilder::default().eps1(1e-4).build().unwrap();
    let mut solver = SpgSolver::new(objective, NoConstraints, settings).unwrap();

    let solution = solver.solve(&vec![0f32; 6]).unwrap();

    assert!(solution.is_converged());
    for xi in solution.x {
        assert!((xi - 1.).abs() <= 1e-3);
    }
}

#[test]
fn test_unconstrained_fixed_array() {
    let objective = |x: &[f64; 2], g: &mut [f64; 2]| -> f64 {
        g[0] = 2. * (x[0] - 1.);
        g[1] = 8. * (x[1] + 2.);
        (x[0] - 1.).powi(2) + 4. * (x[1] + 2.).powi(2)
    };

    let settings = SpgSettings::default();
    let mut solver = SpgSolver::new(objective, NoConstraints, settings).unwrap();

    let solution = solver.solve(&[0., 0.]).unwrap();

    assert!(solution.is_converged());
    assert!((solution.x[0] - 1.).abs() <= 1e-5);
    assert!((solution.x[1] + 2.).abs() <= 1e-5);
}
