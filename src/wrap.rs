//! Adapters giving plain closures the evaluation traits the solvers expect.
//!
//! Pick the wrapper matching what you can supply: just f(x), f(x) with an
//! analytic first derivative, or first and second derivatives.  For an
//! estimated derivative see `derivative::CentralDifference`.

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Trait evaluating the second derivative: d2f(x) with x in R^1.
pub trait RealD2fEval {
    fn eval_d2f(&self, x: f64) -> f64;
}

/// Wraps a function to implement RealFnEval.
pub struct RealFn<F> {
    f: F,
}

impl<F> RealFn<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> RealFn<F> {
        RealFn { f }
    }
}

impl<F> RealFnEval for RealFn<F>
where
    F: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Wraps a function and its first derivative.
pub struct RealFnAndFirst<F1, F2> {
    f: F1,
    df: F2,
}

impl<F1, F2> RealFnAndFirst<F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    pub fn new(f: F1, df: F2) -> RealFnAndFirst<F1, F2> {
        RealFnAndFirst { f, df }
    }
}

impl<F1, F2> RealFnEval for RealFnAndFirst<F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F1, F2> RealDfEval for RealFnAndFirst<F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// Wraps a function along with its first and second derivatives.
pub struct RealFnAndFirstSecond<F1, F2, F3> {
    f: F1,
    df: F2,
    d2f: F3,
}

impl<F1, F2, F3> RealFnAndFirstSecond<F1, F2, F3>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
    F3: Fn(f64) -> f64,
{
    pub fn new(f: F1, df: F2, d2f: F3) -> RealFnAndFirstSecond<F1, F2, F3> {
        RealFnAndFirstSecond { f, df, d2f }
    }
}

impl<F1, F2, F3> RealFnEval for RealFnAndFirstSecond<F1, F2, F3>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
    F3: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F1, F2, F3> RealDfEval for RealFnAndFirstSecond<F1, F2, F3>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
    F3: Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

impl<F1, F2, F3> RealD2fEval for RealFnAndFirstSecond<F1, F2, F3>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
    F3: Fn(f64) -> f64,
{
    fn eval_d2f(&self, x: f64) -> f64 {
        (self.d2f)(x)
    }
}
