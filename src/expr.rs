//! Textual expressions in the single variable `x`.
//!
//! Parsing and evaluation are delegated to `meval`.  On top of its builtins
//! (`sqrt`, `sin`, `asin`, `exp`, `ln`, `abs`, ..., constants `pi` and `e`)
//! the context provides `pow(a, b)` so C-style formulas can be pasted as is.

use std::fmt;

use log::debug;
use meval::{Context, Expr};

use crate::error::Error;
use crate::wrap::RealFnEval;

/// A compiled expression, ready to evaluate.
///
/// The text is parsed and bound once, at construction; evaluation never
/// fails (points outside the natural domain yield NaN).
pub struct Expression {
    source: String,
    func: Box<dyn Fn(f64) -> f64>,
}

impl Expression {
    /// Compile `source`, binding its free variable `x`.
    ///
    /// Fails with `Error::Expression` on syntax errors and on unknown
    /// variables or functions.
    pub fn parse(source: &str) -> Result<Expression, Error> {
        let compile_error = |e: meval::Error| Error::Expression {
            source_text: source.to_string(),
            source: e,
        };

        let expr: Expr = source.parse().map_err(compile_error)?;

        let mut ctx = Context::new();
        ctx.func2("pow", f64::powf);
        let func = expr.bind_with_context(ctx, "x").map_err(compile_error)?;

        debug!("compiled expression `{}`", source);
        Ok(Expression {
            source: source.to_string(),
            func: Box::new(func),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl RealFnEval for Expression {
    fn eval_f(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Expression")
            .field("source", &self.source)
            .finish()
    }
}
