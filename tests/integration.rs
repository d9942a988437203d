use rootscan::bracket::Bounds;
use rootscan::solver::{
    scan_roots, scan_roots_hybrid, DEFAULT_MAX_ITER, DEFAULT_SUBINTERVALS, DEFAULT_TOLERANCE,
};
use rootscan::wrap::{RealFn, RealFnAndFirst};

#[test]
fn test_end_to_end_scan() {
    // roots at 0, pi, 2pi, ...
    let f = RealFn::new(|x: f64| x.sin());

    // sweep the range in 64 equal steps, bisecting every sign change
    let bounds = Bounds::new(-0.1, 6.3);
    let roots = scan_roots(&f, &bounds, 64, 1e-12, 100).expect("scan");

    assert_eq!(roots.len(), 3);
    for (i, root) in roots.iter().enumerate() {
        let expected = (i as f64) * std::f64::consts::PI;
        assert!(
            (root - expected).abs() < 1e-9,
            "got={}, wanted={}",
            root,
            expected
        );
    }
}

#[test]
fn test_end_to_end_hybrid_scan() {
    // roots at 1 and 4
    let f = RealFnAndFirst::new(|x: f64| (x - 1.0) * (x - 4.0), |x: f64| 2.0 * x - 5.0);

    let bounds = Bounds::new(0.0, 5.0);
    let roots = scan_roots_hybrid(
        &f,
        &bounds,
        DEFAULT_SUBINTERVALS,
        DEFAULT_TOLERANCE,
        DEFAULT_MAX_ITER,
    )
    .expect("scan");

    assert_eq!(roots.len(), 2);
    assert!((roots[0] - 1.0).abs() < 1e-9);
    assert!((roots[1] - 4.0).abs() < 1e-9);
}
