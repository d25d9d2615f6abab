//! Locate real roots of a function of one variable over a bounded interval.
//!
//! The interval is cut into equal segments.  Each segment is classified by
//! the sign behavior of the function and of its numerical derivative, and
//! qualifying segments are refined to a root by bisection.  Only function
//! evaluation is needed: no symbolic derivatives, no closed forms.
//!
//! Functions have to be wrapped before use.  See the `wrap` module for
//! closures and the `expr` module for textual expressions.
//!
//! # Examples
//! Scanning a closure:
//!
//! ```
//! use rootfinder::scan::{scan, RootKind, ScanConfig};
//! use rootfinder::wrap::RealFn;
//!
//! // roots at x=-1.5 and x=1.5
//! let in_f = |x: f64| x * x - 2.25;
//! let f = RealFn::new(&in_f);
//!
//! let config = ScanConfig::new(-2.0, 2.0, 7.0).expect("valid domain");
//! let roots: Vec<_> = scan(&f, &config).collect();
//!
//! assert_eq!(roots.len(), 2);
//! assert_eq!(roots[0].kind, RootKind::Bisected);
//! assert!((roots[0].location + 1.5).abs() < 1e-9);
//! assert!((roots[1].location - 1.5).abs() < 1e-9);
//! ```
//!
//! Scanning an expression:
//!
//! ```
//! use rootfinder::expr::Expression;
//! use rootfinder::scan::{scan, ScanConfig};
//!
//! let f = Expression::parse("sin(x)").expect("expression compiles");
//! let config = ScanConfig::new(0.5, 7.0, 13.0).expect("valid domain");
//!
//! let roots: Vec<f64> = scan(&f, &config).map(|r| r.location).collect();
//! assert_eq!(roots.len(), 2);
//! assert!((roots[0] - std::f64::consts::PI).abs() < 1e-9);
//! ```

pub mod bracket;
pub mod builtin;
pub mod error;
pub mod expr;
pub mod scan;
pub mod solver;
pub mod wrap;

pub use error::Error;

/// Absolute tolerance for bisection brackets and for treating `f(x)` as zero.
///
/// Close to the practical limit of `f64` for unit-scale arguments; do not
/// decrease.
pub const EPSILON: f64 = 1e-12;

/// Step used by the forward-difference derivative.
pub const DX: f64 = 1e-12;
