/// A frame coordinate, x growing rightwards and y growing downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}
