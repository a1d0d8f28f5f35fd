use std::fmt;

/// Bits of significand in an IEEE double, the floor for arbitrary precision.
pub const DOUBLE_BITS: u32 = 53;

const LOG2_10: f64 = 3.321928094887362;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Precision {
    Native,
    Arbitrary { bits: u32 },
}

impl Precision {
    /// Converts a requested significant-decimal-digit count into bits of
    /// significand, never dropping below double precision.
    #[must_use]
    pub fn from_digits(digits: u32) -> Self {
        let bits = (f64::from(digits) * LOG2_10).ceil() as u32;

        Self::Arbitrary {
            bits: bits.max(DOUBLE_BITS),
        }
    }

    #[must_use]
    pub fn bits(&self) -> u32 {
        match self {
            Self::Native => DOUBLE_BITS,
            Self::Arbitrary { bits } => *bits,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native f64"),
            Self::Arbitrary { bits } => write!(f, "arbitrary ({} bits)", bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digits_never_drops_below_double_precision() {
        assert_eq!(
            Precision::from_digits(1),
            Precision::Arbitrary { bits: DOUBLE_BITS }
        );
        assert_eq!(
            Precision::from_digits(15),
            Precision::Arbitrary { bits: DOUBLE_BITS }
        );
    }

    #[test]
    fn test_from_digits_scales_with_digit_count() {
        // 30 digits * log2(10) = 99.66 -> 100 bits
        assert_eq!(Precision::from_digits(30), Precision::Arbitrary { bits: 100 });
        // 100 digits * log2(10) = 332.2 -> 333 bits
        assert_eq!(Precision::from_digits(100), Precision::Arbitrary { bits: 333 });
    }

    #[test]
    fn test_bits_for_native_is_double_width() {
        assert_eq!(Precision::Native.bits(), 53);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Precision::Native), "native f64");
        assert_eq!(
            format!("{}", Precision::Arbitrary { bits: 128 }),
            "arbitrary (128 bits)"
        );
    }
}
