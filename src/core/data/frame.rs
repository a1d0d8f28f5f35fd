use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "frame buffer must hold {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for FrameError {}

/// One fully rendered image: a flat RGB byte buffer of length
/// `3 * width * height`, row-major, top-to-bottom, left-to-right. Created
/// fresh per render and owned exclusively by the requesting caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    max_iterations: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn from_pixels(
        width: u32,
        height: u32,
        max_iterations: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, FrameError> {
        let expected = (width as usize) * (height as usize) * 3;

        if pixels.len() != expected {
            return Err(FrameError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            max_iterations,
            pixels,
        })
    }

    /// Reassembles a frame from per-band RGB slices, in band order. The
    /// caller is responsible for passing bands in original row order.
    pub fn from_bands(
        width: u32,
        height: u32,
        max_iterations: u32,
        bands: Vec<Vec<u8>>,
    ) -> Result<Self, FrameError> {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 3);

        for band in bands {
            pixels.extend(band);
        }

        Self::from_pixels(width, height, max_iterations, pixels)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGB triple at a frame coordinate, for inspection in tests and
    /// callers that probe single pixels.
    #[must_use]
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = ((y as usize) * (self.width as usize) + (x as usize)) * 3;

        Some([
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_valid() {
        let frame = Frame::from_pixels(2, 2, 10, vec![7; 12]).unwrap();

        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.max_iterations(), 10);
        assert_eq!(frame.pixels().len(), 12);
    }

    #[test]
    fn test_from_pixels_wrong_size() {
        let result = Frame::from_pixels(2, 2, 10, vec![0; 11]);

        assert_eq!(
            result,
            Err(FrameError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn test_from_bands_concatenates_in_order() {
        let top = vec![1; 6]; // row 0 of a 2x2 frame
        let bottom = vec![2; 6]; // row 1

        let frame = Frame::from_bands(2, 2, 10, vec![top, bottom]).unwrap();

        assert_eq!(&frame.pixels()[..6], &[1; 6]);
        assert_eq!(&frame.pixels()[6..], &[2; 6]);
    }

    #[test]
    fn test_from_bands_rejects_short_total() {
        let result = Frame::from_bands(2, 2, 10, vec![vec![1; 6]]);

        assert_eq!(
            result,
            Err(FrameError::BufferSizeMismatch {
                expected: 12,
                actual: 6
            })
        );
    }

    #[test]
    fn test_rgb_at() {
        let mut pixels = vec![0; 12];
        pixels[9..].copy_from_slice(&[10, 20, 30]); // pixel (1,1)

        let frame = Frame::from_pixels(2, 2, 10, pixels).unwrap();

        assert_eq!(frame.rgb_at(1, 1), Some([10, 20, 30]));
        assert_eq!(frame.rgb_at(0, 0), Some([0, 0, 0]));
        assert_eq!(frame.rgb_at(2, 0), None);
        assert_eq!(frame.rgb_at(0, 2), None);
    }
}
