use spgopt::solver::*;

fn main() {
    // Bound constrained quadratic
    //
    // minimize    1/2 x'Dx - c'x
    // subject to  -1 <= x <= 1
    //
    // with D = diag(1, 2, ..., n) and c_i = 2 for all i.  The
    // unconstrained minimizer is x_i = 2/i, so the first entry sits
    // on its upper bound.

    let n = 10;

    let objective = |x: &Vec<f64>, g: &mut Vec<f64>| -> f64 {
        let mut f = 0.;
        for (i, (gi, xi)) in g.iter_mut().zip(x).enumerate() {
            let d = (i + 1) as f64;
            *gi = d * xi - 2.;
            f += 0.5 * d * xi * xi - 2. * xi;
        }
        f
    };

    let projector = |dst: &mut Vec<f64>, src: &Vec<f64>| {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.clamp(-1., 1.);
        }
    };

    let settings = SpgSettingsBuilder::default()
        .mem(10)
        .verbose(true)
        .build()
        .unwrap();

    let mut solver = SpgSolver::new(objective, projector, settings).unwrap();

    let solution = solver.solve(&vec![0.; n]).unwrap();

    println!("Solution = {:?}", solution.x);
}
