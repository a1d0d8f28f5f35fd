use crate::core::data::numeric::{Numeric, NumericError};
use crate::core::data::precision::Precision;
use std::error::Error;
use std::fmt;

/// Canonical initial view of the set: x in (-2.0, 1.0), y in (-1.5, 1.5).
pub const CANONICAL_XS: f64 = -2.0;
pub const CANONICAL_XE: f64 = 1.0;
pub const CANONICAL_YS: f64 = -1.5;
pub const CANONICAL_YE: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub enum WindowError {
    InvalidBounds { width: f64, height: f64 },
    Numeric(NumericError),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { width, height } => {
                write!(f, "window size must be positive: {}x{}", width, height)
            }
            Self::Numeric(err) => write!(f, "window bounds error: {}", err),
        }
    }
}

impl Error for WindowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBounds { .. } => None,
            Self::Numeric(err) => Some(err),
        }
    }
}

impl From<NumericError> for WindowError {
    fn from(err: NumericError) -> Self {
        Self::Numeric(err)
    }
}

/// The rectangular region of the complex plane currently mapped onto the
/// pixel frame. All four bounds share one variant/precision and satisfy
/// `xe > xs`, `ye > ys`.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    xs: Numeric,
    xe: Numeric,
    ys: Numeric,
    ye: Numeric,
}

impl Window {
    pub fn new(
        xs: Numeric,
        xe: Numeric,
        ys: Numeric,
        ye: Numeric,
    ) -> Result<Self, WindowError> {
        let width = xe.sub(&xs)?;
        let height = ye.sub(&ys)?;

        if !width.exceeds(0.0) || !height.exceeds(0.0) {
            return Err(WindowError::InvalidBounds {
                width: width.to_f64(),
                height: height.to_f64(),
            });
        }

        // The cross-axis pair must match too; xs/xe and ys/ye were already
        // checked by the subtractions above.
        if xs.precision() != ys.precision() {
            return Err(WindowError::Numeric(NumericError::PrecisionMismatch {
                lhs: xs.precision(),
                rhs: ys.precision(),
            }));
        }

        Ok(Self { xs, xe, ys, ye })
    }

    #[must_use]
    pub fn canonical(precision: Precision) -> Self {
        // All four corner constants are exactly representable as doubles.
        Self {
            xs: Numeric::with_precision(CANONICAL_XS, precision),
            xe: Numeric::with_precision(CANONICAL_XE, precision),
            ys: Numeric::with_precision(CANONICAL_YS, precision),
            ye: Numeric::with_precision(CANONICAL_YE, precision),
        }
    }

    #[must_use]
    pub fn xs(&self) -> &Numeric {
        &self.xs
    }

    #[must_use]
    pub fn xe(&self) -> &Numeric {
        &self.xe
    }

    #[must_use]
    pub fn ys(&self) -> &Numeric {
        &self.ys
    }

    #[must_use]
    pub fn ye(&self) -> &Numeric {
        &self.ye
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.xs.precision()
    }

    pub fn width(&self) -> Result<Numeric, NumericError> {
        self.xe.sub(&self.xs)
    }

    pub fn height(&self) -> Result<Numeric, NumericError> {
        self.ye.sub(&self.ys)
    }

    /// True when `self` fully contains `other`. Used to stop a zoom-out from
    /// overshooting the canonical view.
    pub fn encloses(&self, other: &Window) -> Result<bool, NumericError> {
        Ok(self.xs.le(&other.xs)?
            && self.xe.ge(&other.xe)?
            && self.ys.le(&other.ys)?
            && self.ye.ge(&other.ye)?)
    }
}
