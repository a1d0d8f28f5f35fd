use crate::core::actions::render_frame::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::{BLACK, Colour};

/// The reference palette: `round(255 * sqrt(it / max))` grey for escaping
/// points, black for points that reach the bound.
#[derive(Debug)]
pub struct GreyscaleSqrt {
    max_iterations: u32,
}

impl GreyscaleSqrt {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for GreyscaleSqrt {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(BLACK);
        }

        let ratio = f64::from(iterations) / f64::from(self.max_iterations);
        let level = (255.0 * ratio.sqrt()).round() as u8;

        Ok(Colour {
            r: level,
            g: level,
            b: level,
        })
    }

    fn display_name(&self) -> &str {
        "Greyscale (sqrt)"
    }
}
