use crate::algebra::*;

#[test]
fn test_norms() {
    let x = [-3., 4., -12.];
    assert_eq!(x.norm2(), 13.);
    assert_eq!(x.norm1(), 19.);
    assert_eq!(x.norm_inf(), 12.);
    assert_eq!(x.sumsq(), 169.);

    let x = [-3., f64::NAN, -12.];
    assert!(x.norm_inf().is_nan());

    let x: [f64; 0] = [];
    assert_eq!(x.norm2(), 0.);
    assert_eq!(x.norm_inf(), 0.);
}

#[test]
fn test_norms_f32_widened() {
    let x = vec![3f32, -4f32];
    let n: f64 = x.norm2();
    assert_eq!(n, 5.);
    assert_eq!(x.norm1(), 7.);
}

#[test]
fn test_inner() {
    let x = vec![3., 0., 2., 1.];
    let y = vec![-1., -2., 3., 4.];

    assert_eq!(x.inner(&y).unwrap(), 7.);
    assert_eq!(y.inner(&x).unwrap(), 7.);
}

#[test]
fn test_inner_symmetric() {
    let x: Vec<f64> = (0..37).map(|i| f64::sin(i as f64)).collect();
    let y: Vec<f64> = (0..37).map(|i| f64::cos(0.3 * i as f64)).collect();
    let xy = x.inner(&y).unwrap();
    let yx = y.inner(&x).unwrap();
    assert!((xy - yx).abs() <= 1e-14);
}

#[test]
fn test_inner_shape_mismatch() {
    let x = vec![1., 2., 3.];
    let y = vec![1., 2.];
    let err = x.inner(&y).unwrap_err();
    assert_eq!(
        err,
        VectorError::ShapeMismatch {
            expected: vec![3],
            found: vec![2]
        }
    );
}

#[test]
fn test_inner_weighted() {
    let w = [1., 2.];
    let x = [3., 4.];
    let y = [5., 6.];
    assert_eq!(w.inner_weighted(&x, &y).unwrap(), 63.);

    let y3 = vec![5., 6., 7.];
    assert!(vec![1., 2.].inner_weighted(&vec![3., 4.], &y3).is_err());
}

#[test]
fn test_inner_selected() {
    let x = [1., 2., 3.];
    let y = [4., 5., 6.];
    assert_eq!(x.inner_selected(&[1], &y).unwrap(), 10.);
    assert_eq!(x.inner_selected(&[2, 0], &y).unwrap(), 22.);
    assert_eq!(x.inner_selected(&[], &y).unwrap(), 0.);

    assert_eq!(
        x.inner_selected(&[3], &y).unwrap_err(),
        VectorError::IndexOutOfBounds { index: 3, len: 3 }
    );
    assert!(x.inner_selected(&[0, 7], &y).is_err());
}

#[test]
fn test_swap_with() {
    let mut x = vec![1., 2., 3.];
    let mut y = vec![4., 5., 6.];
    x.swap_with(&mut y).unwrap();
    assert_eq!(x, vec![4., 5., 6.]);
    assert_eq!(y, vec![1., 2., 3.]);

    let mut z = vec![0.; 2];
    assert!(x.swap_with(&mut z).is_err());
}

#[test]
fn test_set_and_zero() {
    let mut x = vec![3., 0., 2., 1.];
    x.set(-2.);
    assert_eq!(x, vec![-2.; 4]);
    x.zero();
    assert_eq!(x, vec![0.; 4]);
}

#[test]
fn test_copy_from() {
    let x = vec![3., 0., 2., 1.];
    let mut y = vec![0.; 4];
    y.copy_from(&x).unwrap();
    assert_eq!(x, y);
}

#[test]
fn test_update() {
    let x = vec![1., 2., 3.];

    let mut y = vec![1., 1., 1.];
    y.update(0., &x).unwrap();
    assert_eq!(y, vec![1., 1., 1.]);

    y.update(1., &x).unwrap();
    assert_eq!(y, vec![2., 3., 4.]);

    y.update(-1., &x).unwrap();
    assert_eq!(y, vec![1., 1., 1.]);

    y.update(0.5, &x).unwrap();
    assert_eq!(y, vec![1.5, 2., 2.5]);
}

#[test]
fn test_update_zero_never_reads_source() {
    let poison = vec![f64::NAN; 3];
    let mut y = vec![1., 2., 3.];
    y.update(0., &poison).unwrap();
    assert_eq!(y, vec![1., 2., 3.]);
}

#[test]
fn test_update_selected() {
    let x = vec![1., 2., 3.];
    let mut y = vec![0.; 3];
    y.update_selected(&[0, 2], 2., &x).unwrap();
    assert_eq!(y, vec![2., 0., 6.]);
    y.update_selected(&[1], -1., &x).unwrap();
    assert_eq!(y, vec![2., -2., 6.]);
    assert!(y.update_selected(&[3], 1., &x).is_err());
}

#[test]
fn test_combine() {
    let x = vec![1., -2., 3.];
    let mut y = vec![9.; 3];

    y.combine(1., &x).unwrap();
    assert_eq!(y, x);

    y.combine(-1., &x).unwrap();
    assert_eq!(y, vec![-1., 2., -3.]);

    y.combine(3., &x).unwrap();
    assert_eq!(y, vec![3., -6., 9.]);

    y.scale(2., &x).unwrap();
    assert_eq!(y, vec![2., -4., 6.]);
}

#[test]
fn test_combine_zero_never_reads_source() {
    let poison = vec![f64::NAN; 4];
    let mut y = vec![7.; 4];
    y.combine(0., &poison).unwrap();
    assert_eq!(y, vec![0.; 4]);

    // either coefficient of the two-source form
    let x = vec![1., 2., 3., 4.];
    y.combine2(0., &poison, 2., &x).unwrap();
    assert_eq!(y, vec![2., 4., 6., 8.]);
    y.combine2(-1., &x, 0., &poison).unwrap();
    assert_eq!(y, vec![-1., -2., -3., -4.]);
}

#[test]
fn test_combine2_special_cases() {
    let x = vec![1., 2.];
    let y = vec![10., 20.];
    let mut w = vec![0.; 2];

    let cases = [
        (1., 1., vec![11., 22.]),
        (1., -1., vec![-9., -18.]),
        (1., 2., vec![21., 42.]),
        (-1., 1., vec![9., 18.]),
        (-1., -1., vec![-11., -22.]),
        (-1., 2., vec![19., 38.]),
        (3., 1., vec![13., 26.]),
        (3., -1., vec![-7., -14.]),
        (3., 0.5, vec![8., 16.]),
    ];
    for (a, b, expected) in cases {
        w.combine2(a, &x, b, &y).unwrap();
        assert_eq!(w, expected, "a = {a}, b = {b}");
    }
}

#[test]
fn test_combine_in_place_matches_fresh_buffer() {
    let d = vec![0.5, -1., 2., 4.];
    let x0 = vec![1., 2., 3., 4.];

    for (a, b) in [(1., 0.25), (1., -1.), (-1., 1.), (-1., 3.), (2., 0.), (-1., 0.), (0.5, -2.)] {
        let mut fresh = vec![0.; 4];
        fresh.combine2(a, &x0, b, &d).unwrap();

        let mut x = x0.clone();
        x.combine_in_place(a, b, &d).unwrap();
        assert_eq!(x, fresh, "a = {a}, b = {b}");
    }

    // zero leading coefficient never reads the destination
    let mut x = vec![f64::NAN; 4];
    x.combine_in_place(0., 2., &d).unwrap();
    assert_eq!(x, vec![1., -2., 4., 8.]);
}

#[test]
fn test_product() {
    let x = [1., 2., 3., 4.];
    let s = [-1., -2., -4., 8.];
    let mut w = [0.; 4];
    w.product(&x, &s).unwrap();
    assert_eq!(w, [-1., -4., -12., 32.]);
}

#[test]
fn test_is_finite() {
    assert!([1., 2.].is_finite());
    assert!(![1., f64::INFINITY].is_finite());
    assert!(![f64::NAN, 2.].is_finite());
}

#[test]
fn test_norm_inf_diff() {
    let x = [1., 2., 3.];
    let y = [1.5, 2., 1.];
    assert_eq!(x.norm_inf_diff(&y).unwrap(), 2.);
}

#[test]
fn test_dense_array_ops() {
    let x = DenseArray::new(&[2, 2], vec![1., 2., 3., 4.]).unwrap();
    let mut y = DenseArray::<f64>::zeros(&[2, 2]);
    y.combine2(2., &x, -1., &x).unwrap();
    assert_eq!(y, x);
    assert_eq!(x.inner(&y).unwrap(), 30.);

    let z = DenseArray::<f64>::zeros(&[4, 1]);
    assert!(matches!(
        y.copy_from(&z),
        Err(VectorError::ShapeMismatch { .. })
    ));
}
