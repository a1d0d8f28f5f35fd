use crate::core::data::complex_point::ComplexPoint;
use crate::core::data::numeric::NumericError;
use crate::core::data::pixel::Pixel;
use crate::core::data::window::Window;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelToPlaneError {
    PixelOutsideFrame {
        pixel: Pixel,
        frame_width: u32,
        frame_height: u32,
    },
    Numeric(NumericError),
}

impl fmt::Display for PixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideFrame {
                pixel,
                frame_width,
                frame_height,
            } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} frame",
                    pixel.x, pixel.y, frame_width, frame_height
                )
            }
            Self::Numeric(err) => write!(f, "plane coordinate error: {}", err),
        }
    }
}

impl Error for PixelToPlaneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelOutsideFrame { .. } => None,
            Self::Numeric(err) => Some(err),
        }
    }
}

impl From<NumericError> for PixelToPlaneError {
    fn from(err: NumericError) -> Self {
        Self::Numeric(err)
    }
}

/// Maps a frame coordinate to the plane point under it:
/// `re = (px/W)*(xe-xs) + xs`, `im = (py/H)*(ye-ys) + ys`.
///
/// The pixel ratio is taken as an exact machine scalar; the window extent it
/// scales carries the active precision, which is what keeps adjacent pixels
/// distinct at depth. Both frame edges are inclusive so `(0,0)` maps to
/// `(xs,ys)` and `(W,H)` to `(xe,ye)`.
pub fn pixel_to_plane(
    pixel: Pixel,
    frame_width: u32,
    frame_height: u32,
    window: &Window,
) -> Result<ComplexPoint, PixelToPlaneError> {
    if frame_width == 0 || frame_height == 0 || pixel.x > frame_width || pixel.y > frame_height {
        return Err(PixelToPlaneError::PixelOutsideFrame {
            pixel,
            frame_width,
            frame_height,
        });
    }

    let ratio_x = f64::from(pixel.x) / f64::from(frame_width);
    let ratio_y = f64::from(pixel.y) / f64::from(frame_height);

    let re = window.width()?.scale(ratio_x).add(window.xs())?;
    let im = window.height()?.scale(ratio_y).add(window.ys())?;

    Ok(ComplexPoint::new(re, im)?)
}
