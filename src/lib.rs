mod controllers;
mod core;
mod storage;

pub use controllers::demo::demo_controller;
pub use controllers::explorer::{Explorer, ExplorerError, RenderRequest};
pub use crate::core::data::complex_point::ComplexPoint;
pub use crate::core::data::frame::Frame;
pub use crate::core::data::numeric::{Numeric, NumericError};
pub use crate::core::data::precision::Precision;
pub use crate::core::data::window::Window;
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_maps::kinds::PaletteKind;
pub use storage::write_ppm::write_ppm;
