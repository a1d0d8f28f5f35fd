use crate::core::actions::render_frame::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::{BLACK, Colour};

const PALETTE: [Colour; 16] = [
    Colour { r: 66, g: 30, b: 15 },
    Colour { r: 25, g: 7, b: 26 },
    Colour { r: 9, g: 1, b: 47 },
    Colour { r: 4, g: 4, b: 73 },
    Colour { r: 0, g: 7, b: 100 },
    Colour { r: 12, g: 44, b: 138 },
    Colour { r: 24, g: 82, b: 177 },
    Colour { r: 57, g: 125, b: 209 },
    Colour { r: 134, g: 181, b: 229 },
    Colour { r: 211, g: 236, b: 248 },
    Colour { r: 241, g: 233, b: 191 },
    Colour { r: 248, g: 201, b: 95 },
    Colour { r: 255, g: 170, b: 0 },
    Colour { r: 204, g: 128, b: 0 },
    Colour { r: 153, g: 87, b: 0 },
    Colour { r: 106, g: 52, b: 3 },
];

/// The Ultra Fractal program's 16-colour cycle, selected by iteration count
/// modulo 16. Immediate escapes and bound-reaching points render black.
#[derive(Debug)]
pub struct UltraFractal {
    max_iterations: u32,
}

impl UltraFractal {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for UltraFractal {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == 0 || iterations == self.max_iterations {
            return Ok(BLACK);
        }

        Ok(PALETTE[(iterations % 16) as usize])
    }

    fn display_name(&self) -> &str {
        "Ultra Fractal"
    }
}
