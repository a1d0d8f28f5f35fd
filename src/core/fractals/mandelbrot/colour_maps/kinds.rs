#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    GreyscaleSqrt,
    UltraFractal,
}
