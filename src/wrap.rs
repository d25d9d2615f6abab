use crate::DX;

/// Trait evaluating: f(x) with x in R^1.
///
/// Implementations must be pure: the scanner may evaluate the same point
/// several times and relies on getting the same answer.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Wraps function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<'a, F> RealFnEval for RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Numerical first derivative by one-sided forward difference:
///
/// `df(x) = (f(x + DX) - f(x)) / DX`
///
/// Not centered, and deliberately so: sign tests in the scanner depend on
/// this exact estimator.
pub struct ForwardDiff<'a, F>
where
    F: 'a + RealFnEval + ?Sized,
{
    pub f: &'a F,
}

impl<'a, F> ForwardDiff<'a, F>
where
    F: 'a + RealFnEval + ?Sized,
{
    pub fn new(f: &'a F) -> ForwardDiff<'a, F> {
        ForwardDiff { f }
    }
}

impl<'a, F> RealDfEval for ForwardDiff<'a, F>
where
    F: 'a + RealFnEval + ?Sized,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.f.eval_f(x + DX) - self.f.eval_f(x)) / DX
    }
}
