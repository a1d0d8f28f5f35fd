pub mod factory;
pub mod greyscale_sqrt;
pub mod kinds;
pub mod ultra_fractal;
