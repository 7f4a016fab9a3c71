#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use spgopt::{algebra::*, solver::*};
    use std::io::{Seek, SeekFrom};

    let target = DenseArray::new(&[2, 2], vec![0.5, -1.0, 2.0, 0.25]).unwrap();
    let objective = move |x: &DenseArray<f64>, g: &mut DenseArray<f64>| -> f64 {
        g.combine2(1., x, -1., &target).unwrap();
        0.5 * g.sumsq()
    };
    let nonnegative = |dst: &mut DenseArray<f64>, src: &DenseArray<f64>| {
        for (d, s) in dst.data_mut().iter_mut().zip(src.data()) {
            *d = s.max(0.);
        }
    };

    // settings written to a file configure a second solver
    let settings = SpgSettingsBuilder::default().mem(5).build().unwrap();
    let mut file = tempfile::tempfile().unwrap();
    settings.write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let settings = SpgSettings::read_from_file(&mut file).unwrap();
    assert_eq!(settings.mem, 5);

    let mut solver = SpgSolver::new(objective, nonnegative, settings).unwrap();
    let solution = solver.solve(&DenseArray::zeros(&[2, 2])).unwrap();
    assert!(solution.is_converged());

    // write the solution to a file and read it back
    let mut file = tempfile::tempfile().unwrap();
    solution.write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let solution2 = SpgSolution::<DenseArray<f64>>::read_from_file(&mut file).unwrap();

    assert_eq!(solution, solution2);
    assert_eq!(solution2.x.shape(), vec![2, 2]);
    assert_eq!(solution2.info.status, SolverStatus::ConvergedInfNorm);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_solution_bad_dimensions() {
    use spgopt::{algebra::*, solver::*};
    use std::io::{ErrorKind, Seek, SeekFrom, Write};

    let solution = SpgSolution {
        x: DenseArray::new(&[2, 2], vec![1., 2., 3., 4.]).unwrap(),
        info: SpgInfo {
            f: 0.,
            fbest: 0.,
            pgnorminf: 0.,
            pgnorm2: 0.,
            ..SpgInfo::default()
        },
    };

    // drop one element so that the data no longer fills the 2x2 shape
    let mut json = serde_json::to_value(&solution).unwrap();
    json["x"]["data"].as_array_mut().unwrap().pop();

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.to_string().as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let result = SpgSolution::<DenseArray<f64>>::read_from_file(&mut file);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(err.to_string().contains("incompatible with data of length 3"));
}
