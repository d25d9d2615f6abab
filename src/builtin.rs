//! The fixed function scanned when no expression is given.

use std::f64::consts::PI;

/// The same formula in expression syntax, for diagnostics.
pub const FORMULA: &str = "(2*asin((x*x-2)/2) - x*x*(2*asin(x/2) - pi) - x*pow(4-x*x, 0.5))/4";

/// `f(x) = (2 asin((x²-2)/2) - x²(2 asin(x/2) - π) - x √(4-x²)) / 4`
///
/// Defined for `|x| <= 2` only; NaN elsewhere.
pub fn builtin(x: f64) -> f64 {
    (2.0 * ((x * x - 2.0) / 2.0).asin() - x * x * (2.0 * (x / 2.0).asin() - PI)
        - x * (4.0 - x * x).powf(0.5))
        / 4.0
}
