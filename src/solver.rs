//! Root finding algorithms.
//!
//! Functions typically have to be wrapped before use.  See the `wrap` module
//! for how to do this.
//!
//! Custom convergence criteria can be supplied to the iterative finders.
//! Canned ones exist in the `convergence` module.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use rootscan::solver::newton_raphson;
//! use rootscan::convergence::ResidualMagnitude;
//! use rootscan::wrap::RealFnAndFirst;
//!
//! // function and its derivative
//! let f = RealFnAndFirst::new(
//!     |x: f64| -x * x + 2.0 * x + 1.0,
//!     |x: f64| -2.0 * x + 2.0,
//! );
//!
//! // convergence criterion
//! let finish = ResidualMagnitude::new(1e-12);
//!
//! // invoke Newton-Raphson
//! let max_iterations = 20;
//! let root = newton_raphson(&f, 3.0, &finish, max_iterations).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root - 2.41421356237).abs() < 1e-9);
//! ```
//!
//! Using the Bisection Method:
//!
//! ```
//! use rootscan::bracket::Bounds;
//! use rootscan::solver::bisection;
//! use rootscan::wrap::RealFn;
//!
//! // function... no derivatives needed!
//! let f = RealFn::new(|x: f64| -x * x + 2.0 * x + 1.0);
//!
//! // invoke bisection
//! let root = bisection(&f, &Bounds::new(2.0, 3.0), 1e-12, 100)
//!     .expect("no error")
//!     .expect("bracketed root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root - 2.41421356237).abs() < 1e-9);
//! ```

use thiserror::Error;

use crate::bracket::{is_sign_change, Bounds, BracketGenerator};
use crate::convergence::{IsConverged, ResidualMagnitude};
use crate::wrap::{RealD2fEval, RealDfEval, RealFnEval};

mod driver;

use driver::iterative_root_find;

/// Conventional residual tolerance when the caller has no tighter need.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Conventional iteration cap for the iterative finders.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Conventional subinterval count for the scanning drivers.
pub const DEFAULT_SUBINTERVALS: usize = 100;

/// Loose residual tolerance for the bisection pre-pass of the hybrid scan.
/// Bisection only has to land close enough for Newton-Raphson to take over.
pub const COARSE_TOLERANCE: f64 = 0.1;

/// Root finding error conditions.
///
/// To help with diagnostics, these errors typically return the last relevant
/// `x` position.
#[derive(Debug, Error)]
pub enum RootError {
    /// Derivative went to zero for a method that depends on it to determine
    /// its next step.
    #[error("derivative evaluated to zero at x={x}")]
    ZeroDerivative { x: f64 },

    /// The solver computed a non-finite value for its next step x-value.
    #[error("iterated to a non-finite x-value from x={x}")]
    IteratedToNaN { x: f64 },

    /// Iteration limit was reached.
    #[error("iteration limit reached, last estimate x={last_x}")]
    IterationLimit { last_x: f64 },
}

/// Root finding using Newton-Raphson.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close
/// to the root this algorithm has quadratic convergence.
///
/// This algorithm requires the first derivative of f(x).  Wrap the function
/// in `wrap::RealFnAndFirst` when an analytic derivative is available, or in
/// `derivative::CentralDifference` to estimate it numerically.
///
/// Exhausting `max_iter` is reported as `RootError::IterationLimit` carrying
/// the last estimate, so a caller keen on a best-effort answer can still
/// recover it from the error.
pub fn newton_raphson<F, C>(
    f: &F,
    start: f64,
    finish: &C,
    max_iter: usize,
) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
    C: IsConverged,
{
    iterative_root_find(f, &nr_iteration, start, finish, max_iter)
}

/// Evaluate a single iteration for Newton's method.  Returns an error if the
/// derivative evaluates to zero.
fn nr_iteration<F>(f: &F, x: f64, f_x: f64) -> Result<f64, RootError>
where
    F: RealDfEval,
{
    let denom = f.eval_df(x);
    if denom == 0.0 {
        return Err(RootError::ZeroDerivative { x });
    }
    let x_new = x - f_x / denom;
    if !x_new.is_finite() {
        return Err(RootError::IteratedToNaN { x });
    }
    Ok(x_new)
}

/// Root finding using Halley's method.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close
/// to the root this algorithm has cubic convergence.
///
/// This algorithm requires both the first and second derivatives of f(x).
/// If only the first derivative is available, consider Newton-Raphson.
pub fn halley_method<F, C>(f: &F, start: f64, finish: &C, max_iter: usize) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval + RealD2fEval,
    C: IsConverged,
{
    iterative_root_find(f, &halley_iteration, start, finish, max_iter)
}

/// Evaluate a single iteration for Halley's method.
fn halley_iteration<F>(f: &F, x: f64, f_x: f64) -> Result<f64, RootError>
where
    F: RealDfEval + RealD2fEval,
{
    let df_x = f.eval_df(x);
    if df_x == 0.0 {
        return Err(RootError::ZeroDerivative { x });
    }
    let d2f_x = f.eval_d2f(x);

    let x_new = x - (2.0 * f_x * df_x) / (2.0 * df_x * df_x - f_x * d2f_x);
    if !x_new.is_finite() {
        return Err(RootError::IteratedToNaN { x });
    }
    Ok(x_new)
}

/// Root finding via the Bisection Method.
///
/// Given a bracket with a sign change, bisection always converges, though
/// the speed of convergence is linear.  Iteration stops once the residual
/// |f(mid)| drops to `tolerance`; the accepted midpoint is returned, so the
/// result always satisfies the residual bound.
///
/// Bounds without a sign change return `Ok(None)` rather than an error.
/// That outcome is routine when sweeping subintervals: the bounds hold
/// either no root or an even number of them, and neither is detectable from
/// the endpoint signs.
///
/// `max_iter` guards against tolerances below floating-point resolution,
/// where the residual can never comply and the loop would otherwise spin
/// forever.  For well-posed inputs the cap is generous and never reached.
pub fn bisection<F>(
    f: &F,
    bounds: &Bounds,
    tolerance: f64,
    max_iter: usize,
) -> Result<Option<f64>, RootError>
where
    F: RealFnEval,
{
    assert!(tolerance > 0.0, "tolerance must be positive");
    assert!(tolerance.is_finite(), "tolerance must be finite");

    let mut window = bounds.clone();
    let mut f_a = f.eval_f(window.a);

    if !is_sign_change(f_a, f.eval_f(window.b)) {
        return Ok(None);
    }

    for _ in 0..max_iter {
        let mid = window.middle();
        let f_mid = f.eval_f(mid);

        if f_mid.abs() <= tolerance {
            return Ok(Some(mid));
        }

        if is_sign_change(f_a, f_mid) {
            window.b = mid;
        } else {
            window.a = mid;
            f_a = f_mid;
        }
    }
    Err(RootError::IterationLimit {
        last_x: window.middle(),
    })
}

/// Finds every root bracketed by a fixed-count subinterval sweep of
/// `bounds`, refining each bracket with bisection.
///
/// Roots come back in ascending order, one per sign-changing subinterval.
/// A pair of roots closer together than one subinterval produces no sign
/// change and goes undetected; raise `count` to tighten the sweep.
///
/// # Examples
///
/// ```
/// use rootscan::bracket::Bounds;
/// use rootscan::solver::scan_roots;
/// use rootscan::wrap::RealFn;
///
/// // roots at 0 and pi
/// let f = RealFn::new(|x: f64| x.sin());
/// let roots = scan_roots(&f, &Bounds::new(-0.1, 3.2), 50, 1e-12, 100).expect("scan");
///
/// assert_eq!(roots.len(), 2);
/// assert!(roots[0].abs() < 1e-9);
/// assert!((roots[1] - std::f64::consts::PI).abs() < 1e-9);
/// ```
pub fn scan_roots<F>(
    f: &F,
    bounds: &Bounds,
    count: usize,
    tolerance: f64,
    max_iter: usize,
) -> Result<Vec<f64>, RootError>
where
    F: RealFnEval,
{
    let mut roots = Vec::new();
    for bracket in BracketGenerator::new(f, bounds, count) {
        if let Some(root) = bisection(f, &bracket, tolerance, max_iter)? {
            roots.push(root);
        }
    }
    Ok(roots)
}

/// Finds every root bracketed by a fixed-count subinterval sweep of
/// `bounds`, combining bisection with Newton-Raphson.
///
/// Each sign-changing subinterval is first localized by bisection at the
/// loose `COARSE_TOLERANCE`, which is cheap and cannot diverge.  The coarse
/// estimate then seeds Newton-Raphson, which closes the remaining distance
/// at quadratic speed down to the caller's `tolerance`.
///
/// The wrapped function must supply a derivative: analytic via
/// `wrap::RealFnAndFirst`, or estimated via `derivative::CentralDifference`.
///
/// # Examples
///
/// ```
/// use rootscan::bracket::Bounds;
/// use rootscan::derivative::CentralDifference;
/// use rootscan::solver::scan_roots_hybrid;
///
/// // roots at -1, 0, and 1; derivative estimated numerically
/// let f = CentralDifference::new(|x: f64| x * x * x - x);
/// let roots = scan_roots_hybrid(&f, &Bounds::new(-1.5, 1.5), 100, 1e-12, 1000).expect("scan");
///
/// assert_eq!(roots.len(), 3);
/// assert!((roots[0] + 1.0).abs() < 1e-9);
/// assert!(roots[1].abs() < 1e-9);
/// assert!((roots[2] - 1.0).abs() < 1e-9);
/// ```
pub fn scan_roots_hybrid<F>(
    f: &F,
    bounds: &Bounds,
    count: usize,
    tolerance: f64,
    max_iter: usize,
) -> Result<Vec<f64>, RootError>
where
    F: RealFnEval + RealDfEval,
{
    let finish = ResidualMagnitude::new(tolerance);

    let mut roots = Vec::new();
    for bracket in BracketGenerator::new(f, bounds, count) {
        if let Some(coarse) = bisection(f, &bracket, COARSE_TOLERANCE, max_iter)? {
            roots.push(newton_raphson(f, coarse, &finish, max_iter)?);
        }
    }
    Ok(roots)
}
