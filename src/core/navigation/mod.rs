pub mod centred;
pub mod corner;

use crate::core::data::numeric::NumericError;
use crate::core::data::pixel::Pixel;
use crate::core::data::window::{Window, WindowError};
use crate::core::util::pixel_to_plane::PixelToPlaneError;
use centred::CentredNavigator;
use corner::CornerNavigator;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    InvalidFactor { factor: f64 },
    PixelToPlane(PixelToPlaneError),
    Numeric(NumericError),
    Window(WindowError),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFactor { factor } => {
                write!(f, "zoom factor must be finite and greater than 1.0, got {}", factor)
            }
            Self::PixelToPlane(_) => write!(f, "failed to resolve the focal point"),
            Self::Numeric(_) => write!(f, "numeric operation failed while navigating"),
            Self::Window(_) => write!(f, "navigation produced an invalid window"),
        }
    }
}

impl Error for NavigationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFactor { .. } => None,
            Self::PixelToPlane(source) => Some(source),
            Self::Numeric(source) => Some(source),
            Self::Window(source) => Some(source),
        }
    }
}

impl From<PixelToPlaneError> for NavigationError {
    fn from(error: PixelToPlaneError) -> Self {
        Self::PixelToPlane(error)
    }
}

impl From<NumericError> for NavigationError {
    fn from(error: NumericError) -> Self {
        Self::Numeric(error)
    }
}

impl From<WindowError> for NavigationError {
    fn from(error: WindowError) -> Self {
        Self::Window(error)
    }
}

pub(crate) fn validate_factor(factor: f64) -> Result<(), NavigationError> {
    if !factor.is_finite() || factor <= 1.0 {
        return Err(NavigationError::InvalidFactor { factor });
    }
    Ok(())
}

/// The two viewport strategies behind one interface. Corner tracks the window
/// bounds directly; centred tracks a centre point and an integer zoom level
/// and derives the window from them.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigator {
    Corner(CornerNavigator),
    Centred(CentredNavigator),
}

impl Navigator {
    #[must_use]
    pub fn window(&self) -> &Window {
        match self {
            Self::Corner(navigator) => navigator.window(),
            Self::Centred(navigator) => navigator.window(),
        }
    }

    pub fn zoom_in(&mut self, focal: Pixel) -> Result<(), NavigationError> {
        match self {
            Self::Corner(navigator) => navigator.zoom_in(focal),
            Self::Centred(navigator) => navigator.zoom_in(focal),
        }
    }

    pub fn zoom_out(&mut self, focal: Pixel) -> Result<(), NavigationError> {
        match self {
            Self::Corner(navigator) => navigator.zoom_out(focal),
            Self::Centred(navigator) => navigator.zoom_out(focal),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::Corner(navigator) => navigator.reset(),
            Self::Centred(navigator) => navigator.reset(),
        }
    }
}
