use crate::core::data::complex_point::ComplexPoint;
use crate::core::data::numeric::Numeric;
use crate::core::data::pixel::Pixel;
use crate::core::data::precision::Precision;
use crate::core::data::window::Window;
use crate::core::navigation::{NavigationError, validate_factor};
use crate::core::util::pixel_to_plane::pixel_to_plane;

const RESET_CENTRE_RE: f64 = -0.5;
const RESET_CENTRE_IM: f64 = 0.0;

/// Viewport navigation that stores a centre point and an integer zoom level
/// and derives a square window from them, `centre ± 1/factor^level` on both
/// axes. Zooming in recentres on the focal pixel and raises the level;
/// zooming out lowers the level with the centre unchanged, so the level is
/// always recoverable by the opposite action. The home view at level zero is
/// the canonical window, not a derived square.
#[derive(Debug, Clone, PartialEq)]
pub struct CentredNavigator {
    centre: ComplexPoint,
    zoom_level: i32,
    factor: f64,
    frame_width: u32,
    frame_height: u32,
    precision: Precision,
    window: Window,
}

impl CentredNavigator {
    pub fn new(
        factor: f64,
        frame_width: u32,
        frame_height: u32,
        precision: Precision,
    ) -> Result<Self, NavigationError> {
        validate_factor(factor)?;

        Ok(Self {
            centre: reset_centre(precision),
            zoom_level: 0,
            factor,
            frame_width,
            frame_height,
            precision,
            window: Window::canonical(precision),
        })
    }

    /// Starts from a saved location: a centre given as decimal strings plus a
    /// zoom level. The strings parse directly at the target precision, so a
    /// seed deeper than double resolution lands on the right point.
    pub fn from_seeds(
        re: &str,
        im: &str,
        zoom_level: i32,
        factor: f64,
        frame_width: u32,
        frame_height: u32,
        precision: Precision,
    ) -> Result<Self, NavigationError> {
        validate_factor(factor)?;

        let centre = ComplexPoint::new(
            Numeric::from_decimal_str(re, precision)?,
            Numeric::from_decimal_str(im, precision)?,
        )?;
        let window = derive_window(&centre, zoom_level, factor, precision)?;

        Ok(Self {
            centre,
            zoom_level,
            factor,
            frame_width,
            frame_height,
            precision,
            window,
        })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn centre(&self) -> &ComplexPoint {
        &self.centre
    }

    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    pub fn zoom_in(&mut self, focal: Pixel) -> Result<(), NavigationError> {
        let point = self.focal_point(focal)?;

        self.centre = point;
        self.zoom_level += 1;
        self.window = derive_window(&self.centre, self.zoom_level, self.factor, self.precision)?;

        Ok(())
    }

    pub fn zoom_out(&mut self, _focal: Pixel) -> Result<(), NavigationError> {
        let level = self.zoom_level - 1;
        let grown = derive_window(&self.centre, level, self.factor, self.precision)?;

        if grown.encloses(&Window::canonical(self.precision))? {
            self.reset();
        } else {
            self.zoom_level = level;
            self.window = grown;
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.centre = reset_centre(self.precision);
        self.zoom_level = 0;
        self.window = Window::canonical(self.precision);
    }

    fn focal_point(&self, focal: Pixel) -> Result<ComplexPoint, NavigationError> {
        Ok(pixel_to_plane(
            focal,
            self.frame_width,
            self.frame_height,
            &self.window,
        )?)
    }
}

fn reset_centre(precision: Precision) -> ComplexPoint {
    ComplexPoint::with_precision(RESET_CENTRE_RE, RESET_CENTRE_IM, precision)
}

/// Rebuilds the square window for a centre and level. The half-extent
/// `1 / factor^level` is computed in the active precision, so deep levels do
/// not underflow.
fn derive_window(
    centre: &ComplexPoint,
    zoom_level: i32,
    factor: f64,
    precision: Precision,
) -> Result<Window, NavigationError> {
    let offset = Numeric::inverse_power(factor, zoom_level, precision);

    Ok(Window::new(
        centre.re().sub(&offset)?,
        centre.re().add(&offset)?,
        centre.im().sub(&offset)?,
        centre.im().add(&offset)?,
    )?)
}
