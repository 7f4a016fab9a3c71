#![allow(non_snake_case)]
use spgopt::algebra::*;
use spgopt::solver::*;

fn main() {
    // Nonnegative least squares
    //
    // minimize    1/2 ||Ax - b||^2
    // subject to  x >= 0
    //
    // for a dense m x n matrix A stored column major.

    let (m, n) = (40, 15);

    // deterministic pseudo-random data
    let mut seed = 12345u64;
    let mut rand = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((seed >> 11) as f64 / (1u64 << 53) as f64) - 0.5
    };
    let A = DenseArray::new(&[m, n], (0..m * n).map(|_| rand()).collect()).unwrap();
    let b: Vec<f64> = (0..m).map(|_| rand()).collect();

    let objective = move |x: &Vec<f64>, g: &mut Vec<f64>| -> f64 {
        // r = Ax - b
        let mut r: Vec<f64> = b.iter().map(|bi| -bi).collect();
        for j in 0..n {
            for i in 0..m {
                r[i] += A[[i, j]] * x[j];
            }
        }
        // g = A'r
        for j in 0..n {
            g[j] = (0..m).map(|i| A[[i, j]] * r[i]).sum();
        }
        0.5 * r.sumsq()
    };

    let nonnegative = |dst: &mut Vec<f64>, src: &Vec<f64>| {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.max(0.);
        }
    };

    let settings = SpgSettingsBuilder::default()
        .mem(10)
        .eps1(1e-8)
        .verbose(true)
        .build()
        .unwrap();

    let mut solver = SpgSolver::new(objective, nonnegative, settings).unwrap();

    let solution = solver.solve(&vec![0.; n]).unwrap();

    let active = solution.x.iter().filter(|&&xi| xi == 0.).count();
    println!("Solution = {:?}", solution.x);
    println!("{} of {} variables at their bound", active, n);
}
