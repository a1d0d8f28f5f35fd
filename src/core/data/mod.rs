pub mod colour;
pub mod complex_point;
pub mod frame;
pub mod numeric;
pub mod pixel;
pub mod precision;
pub mod window;
