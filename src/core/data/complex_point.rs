use crate::core::data::numeric::{Numeric, NumericError};
use crate::core::data::precision::Precision;

/// A point on the complex plane, immutable once constructed. Both parts are
/// guaranteed to share one variant and precision.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPoint {
    re: Numeric,
    im: Numeric,
}

impl ComplexPoint {
    pub fn new(re: Numeric, im: Numeric) -> Result<Self, NumericError> {
        if re.precision() != im.precision() {
            return Err(NumericError::PrecisionMismatch {
                lhs: re.precision(),
                rhs: im.precision(),
            });
        }

        Ok(Self { re, im })
    }

    /// Builds a point from f64 constants, both parts at one precision.
    #[must_use]
    pub fn with_precision(re: f64, im: f64, precision: Precision) -> Self {
        Self {
            re: Numeric::with_precision(re, precision),
            im: Numeric::with_precision(im, precision),
        }
    }

    #[must_use]
    pub fn re(&self) -> &Numeric {
        &self.re
    }

    #[must_use]
    pub fn im(&self) -> &Numeric {
        &self.im
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.re.precision()
    }

    pub fn magnitude_squared(&self) -> Result<Numeric, NumericError> {
        let re_sq = self.re.mul(&self.re)?;
        let im_sq = self.im.mul(&self.im)?;

        re_sq.add(&im_sq)
    }
}
