use spgopt::{io::ConfigurablePrintTarget, solver::*};

fn square(x: &Vec<f64>, g: &mut Vec<f64>) -> f64 {
    g[0] = 2. * x[0];
    x[0] * x[0]
}

type ObjectiveFn = fn(&Vec<f64>, &mut Vec<f64>) -> f64;

fn test_print_solver() -> SpgSolver<Vec<f64>, ObjectiveFn, NoConstraints> {
    let settings = SpgSettingsBuilder::default().verbose(true).build().unwrap();
    SpgSolver::new(square as ObjectiveFn, NoConstraints, settings).unwrap()
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.solve(&vec![10.]).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.solve(&vec![10.]).unwrap();
    let result = solver.get_print_buffer().unwrap();

    assert!(result.contains("spgopt v"));
    assert!(result.contains("line search: monotone, mem = 1"));
    assert!(result.contains("max iter = Inf, max eval = Inf"));
    assert!(result.contains("|pg|_inf"));
    assert!(result.contains("Terminated with status = ConvergedInfNorm"));
    assert!(result.contains("Convergence with projected gradient infinite-norm"));

    // one status line per iteration, 0 through 2
    let status_lines = result
        .lines()
        .filter(|line| line.trim_start().starts_with(char::is_numeric))
        .count();
    assert_eq!(status_lines, 3);
}

#[test]
fn test_print_quiet() {
    let mut solver = test_print_solver();
    solver.settings.verbose = false;
    solver.print_to_buffer();
    solver.solve(&vec![10.]).unwrap();

    assert!(solver.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve(&vec![10.]).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("spgopt v"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve(&vec![10.]).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("spgopt v"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.solve(&vec![10.]).unwrap();
    // no output
}
