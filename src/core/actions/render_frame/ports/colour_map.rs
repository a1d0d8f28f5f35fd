use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}

/// Maps an escape-time count to a pixel colour. Implementations are pure
/// functions of the count; they hold the iteration bound they were built
/// for and reject counts above it.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
