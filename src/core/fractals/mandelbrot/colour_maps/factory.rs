use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_maps::greyscale_sqrt::GreyscaleSqrt;
use crate::core::fractals::mandelbrot::colour_maps::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::colour_maps::ultra_fractal::UltraFractal;

#[must_use]
pub fn create_palette(kind: PaletteKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        PaletteKind::GreyscaleSqrt => Box::new(GreyscaleSqrt::new(max_iterations)),
        PaletteKind::UltraFractal => Box::new(UltraFractal::new(max_iterations)),
    }
}
