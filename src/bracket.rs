/// Bounds represents the closed interval [lo,hi].
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    lo: f64,
    hi: f64,
}

impl Bounds {
    pub fn new(lo: f64, hi: f64) -> Bounds {
        assert!(lo <= hi);
        assert!(lo.is_finite() && hi.is_finite());
        Bounds { lo, hi }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn size(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Whether the values have strictly opposite signs.
///
/// Zero has no sign and NaN never compares, so neither ever counts as a
/// change.  Unlike a naive `lhs * rhs < 0.0` this survives float underflow.
pub fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}

/// Walks `[from, to]` in equal steps, yielding `[from + i*step, from + (i+1)*step]`.
///
/// Stops at the first segment whose upper edge exceeds `to`.  When the span
/// is not an exact multiple of `step` (or rounding pushes the last edge past
/// `to`) the trailing fraction is never visited.
#[derive(Clone, Debug)]
pub struct Segments {
    from: f64,
    to: f64,
    step: f64,
    i: u64,
    done: bool,
}

impl Segments {
    pub fn new(from: f64, to: f64, step: f64) -> Segments {
        assert!(from.is_finite() && to.is_finite());
        assert!(step > 0.0 && step.is_finite());
        Segments {
            from,
            to,
            step,
            i: 0,
            done: false,
        }
    }
}

impl Iterator for Segments {
    type Item = Bounds;

    fn next(&mut self) -> Option<Bounds> {
        if self.done {
            return None;
        }

        let lo = self.from + (self.i as f64) * self.step;
        let hi = self.from + ((self.i + 1) as f64) * self.step;
        if hi > self.to {
            self.done = true;
            return None;
        }

        self.i += 1;
        Some(Bounds::new(lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_new_valid() {
        let b = Bounds::new(-2.0, 2.0);
        assert_eq!(b.lo(), -2.0);
        assert_eq!(b.hi(), 2.0);
        assert_eq!(b.size(), 4.0);

        let b = Bounds::new(2.0, 2.0);
        assert_eq!(b.lo(), 2.0);
        assert_eq!(b.hi(), 2.0);
    }

    #[test]
    #[should_panic]
    fn test_bounds_new_flipped_extents() {
        Bounds::new(2.0, -2.0);
    }

    #[test]
    #[should_panic]
    fn test_bounds_new_nan() {
        Bounds::new(f64::NAN, -2.0);
    }

    #[test]
    #[should_panic]
    fn test_bounds_new_infinite() {
        Bounds::new(f64::NEG_INFINITY, f64::INFINITY);
    }

    #[test]
    fn test_is_sign_change() {
        // easy peasy
        assert!(!is_sign_change(-1.0, -1.0));
        assert!(!is_sign_change(1.0, 1.0));
        assert!(is_sign_change(-1.0, 1.0));
        assert!(is_sign_change(1.0, -1.0));

        // zero is not a sign
        assert!(!is_sign_change(0.0, 0.0));
        assert!(!is_sign_change(0.0, 1.0));
        assert!(!is_sign_change(0.0, -1.0));
        assert!(!is_sign_change(-0.0, 1.0));

        // outside the function's domain
        assert!(!is_sign_change(f64::NAN, -1.0));
        assert!(!is_sign_change(1.0, f64::NAN));
    }

    #[test]
    fn test_is_sign_change_underflow() {
        // floating point underflow breaks naive a*b<0 check
        assert_eq!(1e-170 * -2e-170, 0.0);
        assert!(is_sign_change(1e-170, -2e-170), "sign change with float underflow");
    }

    #[test]
    fn test_segments_exact() {
        let segs: Vec<Bounds> = Segments::new(0.0, 1.0, 0.25).collect();
        assert_eq!(
            segs,
            vec![
                Bounds::new(0.0, 0.25),
                Bounds::new(0.25, 0.5),
                Bounds::new(0.5, 0.75),
                Bounds::new(0.75, 1.0),
            ]
        );
    }

    #[test]
    fn test_segments_skip_trailing_fraction() {
        // 1.0 / 0.3 leaves a trailing [0.9, 1.0] that is never visited
        let segs: Vec<Bounds> = Segments::new(0.0, 1.0, 0.3).collect();
        assert_eq!(segs.len(), 3);
        for s in &segs {
            assert!(s.hi() <= 1.0, "segment {:?} exceeds domain", s);
        }
        assert!((segs[2].hi() - 0.9).abs() < 1e-15);
    }

    #[test]
    fn test_segments_step_wider_than_domain() {
        let mut segs = Segments::new(0.0, 1.0, 2.0);
        assert!(segs.next().is_none());
        assert!(segs.next().is_none());
    }

    #[test]
    #[should_panic]
    fn test_segments_zero_step() {
        Segments::new(0.0, 1.0, 0.0);
    }
}
