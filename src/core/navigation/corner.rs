use crate::core::data::complex_point::ComplexPoint;
use crate::core::data::pixel::Pixel;
use crate::core::data::precision::Precision;
use crate::core::data::window::Window;
use crate::core::navigation::{NavigationError, validate_factor};
use crate::core::util::pixel_to_plane::pixel_to_plane;

/// Viewport navigation that stores the window corners directly. Each zoom
/// recentres the window on the plane point under the focal pixel and scales
/// the extents by the factor; a zoom-out that would grow past the canonical
/// view snaps back to it instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerNavigator {
    window: Window,
    factor: f64,
    frame_width: u32,
    frame_height: u32,
    precision: Precision,
}

impl CornerNavigator {
    pub fn new(
        factor: f64,
        frame_width: u32,
        frame_height: u32,
        precision: Precision,
    ) -> Result<Self, NavigationError> {
        validate_factor(factor)?;

        Ok(Self {
            window: Window::canonical(precision),
            factor,
            frame_width,
            frame_height,
            precision,
        })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn zoom_in(&mut self, focal: Pixel) -> Result<(), NavigationError> {
        let point = self.focal_point(focal)?;
        self.window = self.rescaled(&point, 1.0 / self.factor)?;

        Ok(())
    }

    pub fn zoom_out(&mut self, focal: Pixel) -> Result<(), NavigationError> {
        let point = self.focal_point(focal)?;
        let grown = self.rescaled(&point, self.factor)?;

        if grown.encloses(&Window::canonical(self.precision))? {
            self.reset();
        } else {
            self.window = grown;
        }

        Ok(())
    }

    pub fn reset(&mut self) {
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

    fn rescaled(&self, centre: &ComplexPoint, scale: f64) -> Result<Window, NavigationError> {
        let half_width = self.window.width()?.scale(0.5 * scale);
        let half_height = self.window.height()?.scale(0.5 * scale);

        Ok(Window::new(
            centre.re().sub(&half_width)?,
            centre.re().add(&half_width)?,
            centre.im().sub(&half_height)?,
            centre.im().add(&half_height)?,
        )?)
    }
}
