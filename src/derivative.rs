//! Finite-difference derivative estimation.

use crate::wrap::{RealDfEval, RealFnEval};

/// Default step width for central differencing.
pub const DEFAULT_STEP: f64 = 1e-12;

/// Central-difference estimate of df/dx at x: (f(x+h) - f(x-h)) / (2h).
///
/// Accuracy degrades for ill-conditioned functions or a poorly chosen step.
/// This is an accepted approximation, not a guaranteed-accurate derivative.
pub fn central_difference<F>(f: &F, x: f64, step: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + step) - f(x - step)) / (2.0 * step)
}

/// Wraps a function so its derivative is estimated by central differencing.
///
/// Implements the same traits as `wrap::RealFnAndFirst`, so derivative-based
/// solvers accept it wherever an analytic derivative is unavailable.
pub struct CentralDifference<F> {
    f: F,
    step: f64,
}

impl<F> CentralDifference<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> CentralDifference<F> {
        CentralDifference {
            f,
            step: DEFAULT_STEP,
        }
    }

    pub fn with_step(f: F, step: f64) -> CentralDifference<F> {
        assert!(step > 0.0, "step must be positive");
        assert!(step.is_finite(), "step must be finite");
        CentralDifference { f, step }
    }
}

impl<F> RealFnEval for CentralDifference<F>
where
    F: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F> RealDfEval for CentralDifference<F>
where
    F: Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        central_difference(&self.f, x, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_central_difference_parabola_at_origin() {
        // symmetric about zero, so the difference cancels exactly
        let f = |x: f64| x * x;
        assert_abs_diff_eq!(central_difference(&f, 0.0, DEFAULT_STEP), 0.0);
    }

    #[test]
    fn test_central_difference_cubic() {
        // d/dx x^3 = 3 at x=1; the tiny default step costs some accuracy
        let f = |x: f64| x * x * x;
        assert_abs_diff_eq!(central_difference(&f, 1.0, DEFAULT_STEP), 3.0, epsilon = 1e-2);
    }

    #[test]
    fn test_central_difference_sine() {
        let f = |x: f64| x.sin();
        assert_abs_diff_eq!(central_difference(&f, 0.0, DEFAULT_STEP), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wrapper_forwards_function() {
        let f = CentralDifference::new(|x: f64| x * x - 2.0);
        assert_abs_diff_eq!(f.eval_f(3.0), 7.0);
    }

    #[test]
    fn test_wrapper_estimates_derivative() {
        let f = CentralDifference::with_step(|x: f64| x * x, 1e-6);
        assert_abs_diff_eq!(f.eval_df(2.0), 4.0, epsilon = 1e-4);
    }

    #[test]
    #[should_panic]
    fn test_wrapper_step_zero() {
        let _ = CentralDifference::with_step(|x: f64| x, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_wrapper_step_negative() {
        let _ = CentralDifference::with_step(|x: f64| x, -1e-6);
    }

    #[test]
    #[should_panic]
    fn test_wrapper_step_nan() {
        let _ = CentralDifference::with_step(|x: f64| x, f64::NAN);
    }
}
