use crate::core::data::complex_point::ComplexPoint;
use crate::core::data::numeric::NumericError;

/// Iterates `z -> z^2 + c` from `z = (0,0)` and returns the index at which
/// the orbit first leaves the bailout radius (`|z|^2 > 4`, strictly), or
/// `max_iterations` if it never does.
///
/// The complex square is spelled out as the four real products so the whole
/// loop runs on `Numeric` operations and behaves identically in both
/// precision variants. Pure and deterministic; a precision mismatch inside
/// the loop is a fatal programming error propagated to the caller.
pub fn escape_time(c: &ComplexPoint, max_iterations: u32) -> Result<u32, NumericError> {
    let mut x = c.re().zero_like();
    let mut y = c.im().zero_like();

    for iteration in 0..max_iterations {
        let x_squared = x.mul(&x)?;
        let y_squared = y.mul(&y)?;

        if x_squared.add(&y_squared)?.exceeds(4.0) {
            return Ok(iteration);
        }

        // x' = x^2 - y^2 + re, y' = 2xy + im
        let next_x = x_squared.sub(&y_squared)?.add(c.re())?;
        y = x.scale(2.0).mul(&y)?.add(c.im())?;
        x = next_x;
    }

    Ok(max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::numeric::Numeric;
    use crate::core::data::precision::Precision;

    fn native_point(re: f64, im: f64) -> ComplexPoint {
        ComplexPoint::new(Numeric::native(re), Numeric::native(im)).unwrap()
    }

    fn arbitrary_point(re: f64, im: f64, bits: u32) -> ComplexPoint {
        let precision = Precision::Arbitrary { bits };
        ComplexPoint::new(
            Numeric::with_precision(re, precision),
            Numeric::with_precision(im, precision),
        )
        .unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(&native_point(0.0, 0.0), 1000).unwrap(), 1000);
    }

    #[test]
    fn test_bailout_boundary_is_strict() {
        // c = (2,0): z1 = (2,0) has |z|^2 = 4, which is not > 4, so the orbit
        // survives one more step; z2 = (6,0) escapes. Pins the `>` policy.
        assert_eq!(escape_time(&native_point(2.0, 0.0), 100).unwrap(), 2);
    }

    #[test]
    fn test_point_just_outside_bailout_escapes_immediately() {
        // |z1|^2 = 6.25 > 4 on the first post-step check.
        assert_eq!(escape_time(&native_point(-2.0, -1.5), 100).unwrap(), 1);
    }

    #[test]
    fn test_interior_point_reaches_bound() {
        assert_eq!(escape_time(&native_point(-1.0, 0.0), 500).unwrap(), 500);
        assert_eq!(escape_time(&native_point(0.25, 0.0), 500).unwrap(), 500);
    }

    #[test]
    fn test_deterministic() {
        let c = native_point(0.3, 0.5);

        assert_eq!(
            escape_time(&c, 1000).unwrap(),
            escape_time(&c, 1000).unwrap()
        );
    }

    #[test]
    fn test_native_and_arbitrary_double_width_agree_exactly() {
        // At 53 bits MPFR round-to-nearest is IEEE double arithmetic, so the
        // counts must agree for every sample, escaping or not.
        let samples = [
            (0.0, 0.0),
            (2.0, 0.0),
            (-2.0, -1.5),
            (-1.0, 0.0),
            (0.3, 0.5),
            (-0.75, 0.1),
            (-0.1, 0.65),
            (0.28, 0.008),
        ];

        for (re, im) in samples {
            let native = escape_time(&native_point(re, im), 300).unwrap();
            let arbitrary = escape_time(&arbitrary_point(re, im, 53), 300).unwrap();

            assert_eq!(native, arbitrary, "diverged at c = ({}, {})", re, im);
        }
    }

    #[test]
    fn test_higher_precision_agrees_on_clear_cut_points() {
        for (re, im, expected) in [(0.0, 0.0, 50), (2.0, 0.0, 2), (-1.0, 0.0, 50)] {
            assert_eq!(
                escape_time(&arbitrary_point(re, im, 256), 50).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_zero_max_iterations_returns_zero() {
        assert_eq!(escape_time(&native_point(0.0, 0.0), 0).unwrap(), 0);
    }
}
