//! Interval scanning: sample, classify, refine.
//!
//! The domain `[from, to]` is cut into equal segments.  Each segment
//! `[lo, hi]` is tested against three rules, in this order, and only the
//! first match reports:
//!
//! 1. `|f(lo)| < EPSILON`: `lo` itself is a root (`RootKind::ZeroCrossing`).
//! 2. `f(lo)` and `f(hi)` differ in sign: bisect `f` (`RootKind::Bisected`).
//! 3. `f'(lo)` and `f'(hi)` differ in sign: bisect `f'`, and report the
//!    stationary point only when `f` vanishes there too
//!    (`RootKind::StationaryZero`).
//!
//! Only left edges are tested by rule 1, so a root sitting exactly on `to`
//! is never reported.

use log::{debug, trace, warn};

use crate::bracket::{is_sign_change, Bounds, Segments};
use crate::error::Error;
use crate::solver::{bisection, RootError};
use crate::wrap::{ForwardDiff, RealDfEval, RealFnEval};
use crate::EPSILON;

/// Immutable description of one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanConfig {
    from: f64,
    to: f64,
    segments: f64,
}

impl ScanConfig {
    /// Validates `from < to` and `segments > 0`, all finite.
    ///
    /// `segments` need not be integral; the step is simply
    /// `(to - from) / segments`.
    pub fn new(from: f64, to: f64, segments: f64) -> Result<ScanConfig, Error> {
        let invalid = Error::InvalidDomain { from, to, segments };
        if !(from.is_finite() && to.is_finite() && segments.is_finite()) {
            return Err(invalid);
        }
        if from >= to || segments <= 0.0 {
            return Err(invalid);
        }

        let step = (to - from) / segments;
        if !(step > 0.0 && step.is_finite()) {
            return Err(invalid);
        }
        Ok(ScanConfig { from, to, segments })
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn segments(&self) -> f64 {
        self.segments
    }

    pub fn step(&self) -> f64 {
        (self.to - self.from) / self.segments
    }

    /// Segments visited by the scan, in ascending order.
    pub fn segment_iter(&self) -> Segments {
        Segments::new(self.from, self.to, self.step())
    }
}

/// How a root was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootKind {
    /// `f` was already within `EPSILON` of zero at a segment's left edge.
    ZeroCrossing,
    /// `f` changed sign across the segment and was bisected.
    Bisected,
    /// `f'` changed sign, and `f` is near zero at the stationary point.
    StationaryZero,
}

impl RootKind {
    /// Output label of the command-line tool.
    pub fn label(&self) -> &'static str {
        match *self {
            RootKind::ZeroCrossing => "Zero at fih",
            RootKind::Bisected => "Bisection",
            RootKind::StationaryZero => "df/dx=0",
        }
    }
}

/// A root location and the rule that found it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootReport {
    pub location: f64,
    pub kind: RootKind,
}

/// Bisect, accepting the last midpoint if `f64` resolution runs out first.
fn refine<G>(g: &G, seg: &Bounds) -> f64
where
    G: Fn(f64) -> f64,
{
    match bisection(g, seg) {
        Ok(x) => x,
        Err(RootError::IterationLimit { last_x }) => {
            warn!(
                "bisection on [{}, {}] stalled at f64 resolution; using x={}",
                seg.lo(),
                seg.hi(),
                last_x
            );
            last_x
        }
    }
}

/// Apply the classification rules to a single segment.
///
/// Returns at most one report.  NaN samples (points outside the function's
/// domain) satisfy no rule.  Sign changes are tested with `is_sign_change`
/// rather than the product `a * b < 0`, so an underflowing product still
/// counts as a change.
pub fn classify<F, D>(f: &F, df: &D, seg: &Bounds) -> Option<RootReport>
where
    F: RealFnEval + ?Sized,
    D: RealDfEval + ?Sized,
{
    let f_lo = f.eval_f(seg.lo());
    let f_hi = f.eval_f(seg.hi());
    trace!(
        "segment [{}, {}]: f(lo)={}, f(hi)={}",
        seg.lo(),
        seg.hi(),
        f_lo,
        f_hi
    );
    if f_lo.is_nan() || f_hi.is_nan() {
        trace!("segment [{}, {}] touches a point outside the domain", seg.lo(), seg.hi());
    }

    // exact hit on the left edge
    if f_lo.abs() < EPSILON {
        return Some(RootReport {
            location: seg.lo(),
            kind: RootKind::ZeroCrossing,
        });
    }

    // function crosses the x axis inside the segment
    if is_sign_change(f_lo, f_hi) {
        let root = refine(&|x: f64| f.eval_f(x), seg);
        return Some(RootReport {
            location: root,
            kind: RootKind::Bisected,
        });
    }

    // min/max or inflection; only a root if f touches zero there
    if is_sign_change(df.eval_df(seg.lo()), df.eval_df(seg.hi())) {
        let stationary = refine(&|x: f64| df.eval_df(x), seg);
        let f_stationary = f.eval_f(stationary);
        trace!("stationary point x={}, f(x)={}", stationary, f_stationary);
        if f_stationary.abs() < EPSILON {
            return Some(RootReport {
                location: stationary,
                kind: RootKind::StationaryZero,
            });
        }
    }

    None
}

/// Lazily yields roots in ascending order of location.
pub struct RootScanner<'a, F>
where
    F: 'a + RealFnEval + ?Sized,
{
    f: &'a F,
    df: ForwardDiff<'a, F>,
    segments: Segments,
}

impl<'a, F> Iterator for RootScanner<'a, F>
where
    F: 'a + RealFnEval + ?Sized,
{
    type Item = RootReport;

    fn next(&mut self) -> Option<RootReport> {
        for seg in self.segments.by_ref() {
            if let Some(report) = classify(self.f, &self.df, &seg) {
                debug!("{:?} at x={}", report.kind, report.location);
                return Some(report);
            }
        }
        None
    }
}

/// Scan `config`'s domain for roots of `f`.
///
/// The derivative is estimated numerically with `ForwardDiff`.
pub fn scan<'a, F>(f: &'a F, config: &ScanConfig) -> RootScanner<'a, F>
where
    F: 'a + RealFnEval + ?Sized,
{
    debug!(
        "scanning [{}, {}] in {} segments, step={}",
        config.from(),
        config.to(),
        config.segments(),
        config.step()
    );
    RootScanner {
        f,
        df: ForwardDiff::new(f),
        segments: config.segment_iter(),
    }
}
