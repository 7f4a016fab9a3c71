use spgopt::algebra::*;
use spgopt::solver::*;

fn main() {
    // Box constrained image denoising
    //
    // minimize    1/2 ||x - y||^2 + mu/2 sum (x_{i+1,j} - x_{i,j})^2 + (x_{i,j+1} - x_{i,j})^2
    // subject to  0 <= x <= 1
    //
    // over an n x n image x, where y is a noisy step image.

    let n = 32;
    let mu = 2.0;

    let mut noise = 0.3;
    let mut y = DenseArray::<f64>::zeros(&[n, n]);
    for j in 0..n {
        for i in 0..n {
            let clean = if i < n / 2 { 0.2 } else { 0.9 };
            noise = (noise * 7919.0_f64).fract();
            y[[i, j]] = clean + 0.4 * (noise - 0.5);
        }
    }

    let objective = move |x: &DenseArray<f64>, g: &mut DenseArray<f64>| -> f64 {
        g.combine2(1., x, -1., &y).unwrap();
        let mut f = 0.5 * g.sumsq();

        for j in 0..n {
            for i in 0..n {
                if i + 1 < n {
                    let d = x[[i + 1, j]] - x[[i, j]];
                    f += 0.5 * mu * d * d;
                    g[[i + 1, j]] += mu * d;
                    g[[i, j]] -= mu * d;
                }
                if j + 1 < n {
                    let d = x[[i, j + 1]] - x[[i, j]];
                    f += 0.5 * mu * d * d;
                    g[[i, j + 1]] += mu * d;
                    g[[i, j]] -= mu * d;
                }
            }
        }
        f
    };

    let unit_box = |dst: &mut DenseArray<f64>, src: &DenseArray<f64>| {
        for (d, s) in dst.data_mut().iter_mut().zip(src.data()) {
            *d = s.clamp(0., 1.);
        }
    };

    let settings = SpgSettingsBuilder::default()
        .mem(10)
        .verbose(true)
        .build()
        .unwrap();

    let mut solver = SpgSolver::new(objective, unit_box, settings).unwrap();

    let x0 = DenseArray::<f64>::filled(&[n, n], 0.5);
    let solution = solver.solve(&x0).unwrap();

    // print the middle column of the denoised image
    let column: Vec<f64> = (0..n).map(|i| solution.x[[i, n / 2]]).collect();
    println!("Column {} = {:.3?}", n / 2, column);
}
