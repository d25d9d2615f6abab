//! Bisection refinement of a bracketed sign change.
//!
//! # Examples
//!
//! ```
//! use rootfinder::bracket::Bounds;
//! use rootfinder::solver::bisection;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//!
//! let root = bisection(&in_f, &Bounds::new(2.0, 3.0)).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root-2.41421356237).abs() < 1e-9);
//! ```

use crate::bracket::Bounds;
use crate::EPSILON;
use thiserror::Error;

/// Safety cap on bisection steps.
///
/// Halving any finite `f64` bracket down to `EPSILON` takes fewer steps than
/// this.  It only triggers when `EPSILON` is finer than the spacing of
/// doubles near the bracket, where the midpoint stops moving.
pub const MAX_ITER: usize = 2048;

/// Root finding error conditions.
#[derive(Debug, Error)]
pub enum RootError {
    /// Iteration limit was reached.  `last_x` is the final midpoint, which is
    /// as close as `f64` resolution allows.
    #[error("bisection iteration limit reached, last x={last_x}")]
    IterationLimit { last_x: f64 },
}

/// Root finding via Bisection Method.
///
/// The bracket ends must give `f` values of opposite sign (or one exactly
/// zero); otherwise the answer is meaningless.  The ends are first ordered so
/// that `a` holds the lower function value, then every midpoint with
/// `f(c) <= 0` replaces `a` and every other midpoint replaces `b`.  Stops once
/// `|a - b| < EPSILON` and returns the last midpoint.
///
/// It always converges given a valid starting bracket, but the speed of
/// convergence is linear.
pub fn bisection<F>(f: &F, bounds: &Bounds) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let mut a = bounds.lo();
    let mut b = bounds.hi();

    // orient so the low value side is `a`
    if f(a) > f(b) {
        std::mem::swap(&mut a, &mut b);
    }

    let mut c = a;
    for _ in 0..MAX_ITER {
        c = (a + b) / 2.0;
        let f_c = f(c);

        if f_c <= 0.0 {
            a = c;
        } else {
            b = c;
        }

        // convergence criteria
        if (a - b).abs() < EPSILON {
            return Ok(c);
        }
    }
    Err(RootError::IterationLimit { last_x: c })
}
