use crate::SpError;

/// Floating point type used throughout the model
pub type Real = f64;

/// Upper bound on the number of samples in any generated series.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Absolute/relative tolerance pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SpError::NonFinite { what, value: v })
    }
}

/// Reject exact zero; used for quantities that end up as divisors.
pub fn ensure_nonzero(v: Real, what: &'static str) -> Result<Real, SpError> {
    if v == 0.0 {
        Err(SpError::InvalidArg { what })
    } else {
        Ok(v)
    }
}

/// Abscissa where the segment (x0, y0)-(x1, y1) crosses `level`.
///
/// Returns `None` for a flat segment or when `level` lies outside `[y0, y1]`.
pub fn linear_crossing(x0: Real, y0: Real, x1: Real, y1: Real, level: Real) -> Option<Real> {
    let dy = y1 - y0;
    if dy == 0.0 {
        return None;
    }
    let frac = (level - y0) / dy;
    if !(0.0..=1.0).contains(&frac) {
        return None;
    }
    Some(x0 + frac * (x1 - x0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_nonzero_rejects_zero_only() {
        assert!(ensure_nonzero(0.0, "velocity").is_err());
        assert!(ensure_nonzero(-0.0, "velocity").is_err());
        assert_eq!(ensure_nonzero(-2.0, "velocity").unwrap(), -2.0);
    }

    #[test]
    fn crossing_on_falling_segment() {
        let x = linear_crossing(1.0, 6.0, 2.0, 4.0, 5.0).unwrap();
        assert!((x - 1.5).abs() < 1e-12);
    }

    #[test]
    fn crossing_outside_segment_is_none() {
        assert!(linear_crossing(0.0, 6.0, 1.0, 5.5, 5.0).is_none());
        assert!(linear_crossing(0.0, 5.0, 1.0, 5.0, 5.0).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn crossing_lies_between_endpoints(
            x0 in -100.0_f64..100.0,
            width in 0.01_f64..10.0,
            y0 in -10.0_f64..10.0,
            y1 in -10.0_f64..10.0,
            t in 0.01_f64..0.99,
        ) {
            prop_assume!((y1 - y0).abs() > 1e-6);
            let x1 = x0 + width;
            let level = y0 + t * (y1 - y0);
            let x = linear_crossing(x0, y0, x1, y1, level).unwrap();
            prop_assert!(x >= x0 - 1e-9 && x <= x1 + 1e-9);
        }
    }
}
