use crate::core::data::precision::Precision;
use rug::Float;
use rug::ops::Pow;
use std::error::Error;
use std::fmt;

/// A plane-coordinate scalar, either a machine double or an MPFR float of a
/// fixed bit precision chosen at construction time.
///
/// All arithmetic requires both operands to share the same variant and, for
/// `Arbitrary`, the same precision; mixing them is a programming error
/// surfaced as [`NumericError::PrecisionMismatch`]. Arbitrary-precision
/// results round to nearest, so at 53 bits they agree exactly with `Native`.
#[derive(Debug, Clone)]
pub enum Numeric {
    Native(f64),
    Arbitrary(Float),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    PrecisionMismatch { lhs: Precision, rhs: Precision },
    InvalidDecimal { input: String },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrecisionMismatch { lhs, rhs } => {
                write!(f, "operand precisions differ: {} vs {}", lhs, rhs)
            }
            Self::InvalidDecimal { input } => {
                write!(f, "invalid decimal string: {:?}", input)
            }
        }
    }
}

impl Error for NumericError {}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => a == b,
            (Self::Arbitrary(a), Self::Arbitrary(b)) => a.prec() == b.prec() && a == b,
            _ => false,
        }
    }
}

impl Numeric {
    #[must_use]
    pub fn native(value: f64) -> Self {
        Self::Native(value)
    }

    /// Builds a value from an f64 constant at the requested precision. The
    /// constant is adopted verbatim, so this is only lossless for values
    /// exactly representable as doubles (window corners, small integers).
    #[must_use]
    pub fn with_precision(value: f64, precision: Precision) -> Self {
        match precision {
            Precision::Native => Self::Native(value),
            Precision::Arbitrary { bits } => Self::Arbitrary(Float::with_val(bits, value)),
        }
    }

    /// Parses a plain decimal string (sign, integer part, fractional part).
    ///
    /// In the `Arbitrary` case the digits go straight into MPFR without an
    /// f64 round trip, so seeds deeper than double resolution survive.
    pub fn from_decimal_str(s: &str, precision: Precision) -> Result<Self, NumericError> {
        let invalid = || NumericError::InvalidDecimal {
            input: s.to_string(),
        };

        match precision {
            Precision::Native => s.parse::<f64>().map(Self::Native).map_err(|_| invalid()),
            Precision::Arbitrary { bits } => {
                let parsed = Float::parse(s).map_err(|_| invalid())?;
                Ok(Self::Arbitrary(Float::with_val(bits, parsed)))
            }
        }
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        match self {
            Self::Native(_) => Precision::Native,
            Self::Arbitrary(f) => Precision::Arbitrary { bits: f.prec() },
        }
    }

    #[must_use]
    pub fn zero_like(&self) -> Self {
        Self::with_precision(0.0, self.precision())
    }

    pub fn add(&self, other: &Self) -> Result<Self, NumericError> {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => Ok(Self::Native(a + b)),
            (Self::Arbitrary(a), Self::Arbitrary(b)) if a.prec() == b.prec() => {
                Ok(Self::Arbitrary(Float::with_val(a.prec(), a + b)))
            }
            _ => Err(self.mismatch(other)),
        }
    }

    pub fn sub(&self, other: &Self) -> Result<Self, NumericError> {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => Ok(Self::Native(a - b)),
            (Self::Arbitrary(a), Self::Arbitrary(b)) if a.prec() == b.prec() => {
                Ok(Self::Arbitrary(Float::with_val(a.prec(), a - b)))
            }
            _ => Err(self.mismatch(other)),
        }
    }

    pub fn mul(&self, other: &Self) -> Result<Self, NumericError> {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => Ok(Self::Native(a * b)),
            (Self::Arbitrary(a), Self::Arbitrary(b)) if a.prec() == b.prec() => {
                Ok(Self::Arbitrary(Float::with_val(a.prec(), a * b)))
            }
            _ => Err(self.mismatch(other)),
        }
    }

    /// Multiplies by an exact machine scalar, preserving the variant. Used
    /// for pixel ratios and zoom factors, where the scalar itself carries no
    /// deep-zoom precision.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        match self {
            Self::Native(a) => Self::Native(a * k),
            Self::Arbitrary(a) => Self::Arbitrary(Float::with_val(a.prec(), a * k)),
        }
    }

    /// Computes `1 / base^exponent` at the given precision. Negative
    /// exponents are allowed; the power is taken in the target precision so
    /// deep zoom levels do not underflow through f64.
    #[must_use]
    pub fn inverse_power(base: f64, exponent: i32, precision: Precision) -> Self {
        match precision {
            Precision::Native => Self::Native(1.0 / base.powi(exponent)),
            Precision::Arbitrary { bits } => {
                let power = Float::with_val(bits, base).pow(exponent);
                Self::Arbitrary(Float::with_val(bits, 1.0) / power)
            }
        }
    }

    /// The bailout comparison: strictly greater than the threshold.
    #[must_use]
    pub fn exceeds(&self, threshold: f64) -> bool {
        match self {
            Self::Native(a) => *a > threshold,
            Self::Arbitrary(a) => *a > threshold,
        }
    }

    pub fn le(&self, other: &Self) -> Result<bool, NumericError> {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => Ok(a <= b),
            (Self::Arbitrary(a), Self::Arbitrary(b)) if a.prec() == b.prec() => Ok(a <= b),
            _ => Err(self.mismatch(other)),
        }
    }

    pub fn ge(&self, other: &Self) -> Result<bool, NumericError> {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => Ok(a >= b),
            (Self::Arbitrary(a), Self::Arbitrary(b)) if a.prec() == b.prec() => Ok(a >= b),
            _ => Err(self.mismatch(other)),
        }
    }

    /// Lossy conversion for display and coarse comparisons only.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Native(a) => *a,
            Self::Arbitrary(a) => a.to_f64(),
        }
    }

    fn mismatch(&self, other: &Self) -> NumericError {
        NumericError::PrecisionMismatch {
            lhs: self.precision(),
            rhs: other.precision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arb(value: f64, bits: u32) -> Numeric {
        Numeric::with_precision(value, Precision::Arbitrary { bits })
    }

    #[test]
    fn test_native_arithmetic_is_ieee_double() {
        let a = Numeric::native(0.1);
        let b = Numeric::native(0.2);

        assert_eq!(a.add(&b).unwrap(), Numeric::native(0.1 + 0.2));
        assert_eq!(a.sub(&b).unwrap(), Numeric::native(0.1 - 0.2));
        assert_eq!(a.mul(&b).unwrap(), Numeric::native(0.1 * 0.2));
    }

    #[test]
    fn test_arbitrary_at_double_width_matches_native() {
        let pairs = [(0.1, 0.2), (-1.75, 0.3), (1e-12, 3.0), (-2.0, 1.5)];

        for (x, y) in pairs {
            let (nx, ny) = (Numeric::native(x), Numeric::native(y));
            let (ax, ay) = (arb(x, 53), arb(y, 53));

            assert_eq!(nx.add(&ny).unwrap().to_f64(), ax.add(&ay).unwrap().to_f64());
            assert_eq!(nx.sub(&ny).unwrap().to_f64(), ax.sub(&ay).unwrap().to_f64());
            assert_eq!(nx.mul(&ny).unwrap().to_f64(), ax.mul(&ay).unwrap().to_f64());
        }
    }

    #[test]
    fn test_mixed_variants_are_rejected() {
        let native = Numeric::native(1.0);
        let arbitrary = arb(1.0, 128);

        assert_eq!(
            native.add(&arbitrary),
            Err(NumericError::PrecisionMismatch {
                lhs: Precision::Native,
                rhs: Precision::Arbitrary { bits: 128 },
            })
        );
    }

    #[test]
    fn test_mismatched_arbitrary_precisions_are_rejected() {
        let a = arb(1.0, 64);
        let b = arb(1.0, 128);

        assert_eq!(
            a.mul(&b),
            Err(NumericError::PrecisionMismatch {
                lhs: Precision::Arbitrary { bits: 64 },
                rhs: Precision::Arbitrary { bits: 128 },
            })
        );
    }

    #[test]
    fn test_from_decimal_str_native() {
        let v = Numeric::from_decimal_str("-1.5", Precision::Native).unwrap();

        assert_eq!(v, Numeric::native(-1.5));
    }

    #[test]
    fn test_from_decimal_str_rejects_garbage() {
        let result = Numeric::from_decimal_str("not a number", Precision::Native);

        assert_eq!(
            result,
            Err(NumericError::InvalidDecimal {
                input: "not a number".to_string()
            })
        );

        let result = Numeric::from_decimal_str("", Precision::Arbitrary { bits: 64 });

        assert!(matches!(result, Err(NumericError::InvalidDecimal { .. })));
    }

    #[test]
    fn test_deep_decimal_seeds_stay_distinct_beyond_double_resolution() {
        // These two strings collapse to the same f64 but must stay apart at
        // 200 bits, otherwise adjacent pixels alias at depth.
        let precision = Precision::from_digits(50);
        let a = "-1.99999999999999999999999999999999999999990000";
        let b = "-1.99999999999999999999999999999999999999990001";

        let fa = Numeric::from_decimal_str(a, precision).unwrap();
        let fb = Numeric::from_decimal_str(b, precision).unwrap();

        assert_eq!(fa.to_f64(), fb.to_f64());
        assert_ne!(fa, fb);
        assert!(fb.le(&fa).unwrap());
    }

    #[test]
    fn test_scale_preserves_variant() {
        assert_eq!(Numeric::native(3.0).scale(0.5), Numeric::native(1.5));

        let scaled = arb(3.0, 128).scale(0.5);
        assert_eq!(scaled.precision(), Precision::Arbitrary { bits: 128 });
        assert_eq!(scaled.to_f64(), 1.5);
    }

    #[test]
    fn test_exceeds_is_strict() {
        assert!(!Numeric::native(4.0).exceeds(4.0));
        assert!(Numeric::native(4.0 + f64::EPSILON * 4.0).exceeds(4.0));
        assert!(!arb(4.0, 96).exceeds(4.0));
        assert!(arb(4.5, 96).exceeds(4.0));
    }

    #[test]
    fn test_inverse_power() {
        assert_eq!(
            Numeric::inverse_power(2.0, 3, Precision::Native),
            Numeric::native(0.125)
        );
        assert_eq!(
            Numeric::inverse_power(2.0, -2, Precision::Native),
            Numeric::native(4.0)
        );

        let deep = Numeric::inverse_power(10.0, 400, Precision::from_digits(150));
        // 10^-400 underflows f64 entirely but must stay nonzero in MPFR.
        assert_eq!(deep.to_f64(), 0.0);
        assert!(deep.exceeds(0.0));
    }

    #[test]
    fn test_zero_like_keeps_precision() {
        let z = arb(7.0, 80).zero_like();

        assert_eq!(z.precision(), Precision::Arbitrary { bits: 80 });
        assert!(!z.exceeds(0.0));
    }

    #[test]
    fn test_cross_variant_equality_is_false() {
        assert_ne!(Numeric::native(1.0), arb(1.0, 53));
    }
}
