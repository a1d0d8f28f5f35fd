use crate::core::actions::render_frame::bands::{RowBand, partition_rows};
use crate::core::actions::render_frame::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::frame::{Frame, FrameError};
use crate::core::data::numeric::NumericError;
use crate::core::data::pixel::Pixel;
use crate::core::data::window::Window;
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

#[derive(Debug, PartialEq)]
pub enum RenderFrameError {
    InvalidFrameSize { width: u32, height: u32 },
    ZeroMaxIterations,
    PixelToPlane(PixelToPlaneError),
    Numeric(NumericError),
    ColourMap(ColourMapError),
    Frame(FrameError),
    WorkerPanicked { band_index: usize },
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrameSize { width, height } => {
                write!(f, "frame dimensions {}x{} must both be non-zero", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be non-zero")
            }
            Self::PixelToPlane(_) => write!(f, "failed to map a pixel onto the plane"),
            Self::Numeric(_) => write!(f, "numeric operation failed during iteration"),
            Self::ColourMap(_) => write!(f, "failed to colour an iteration count"),
            Self::Frame(_) => write!(f, "failed to assemble the frame"),
            Self::WorkerPanicked { band_index } => {
                write!(f, "worker rendering band {} panicked", band_index)
            }
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelToPlane(source) => Some(source),
            Self::Numeric(source) => Some(source),
            Self::ColourMap(source) => Some(source),
            Self::Frame(source) => Some(source),
            _ => None,
        }
    }
}

impl From<PixelToPlaneError> for RenderFrameError {
    fn from(error: PixelToPlaneError) -> Self {
        Self::PixelToPlane(error)
    }
}

impl From<NumericError> for RenderFrameError {
    fn from(error: NumericError) -> Self {
        Self::Numeric(error)
    }
}

impl From<ColourMapError> for RenderFrameError {
    fn from(error: ColourMapError) -> Self {
        Self::ColourMap(error)
    }
}

impl From<FrameError> for RenderFrameError {
    fn from(error: FrameError) -> Self {
        Self::Frame(error)
    }
}

/// Renders one contiguous band of rows into packed RGB bytes.
pub(super) fn render_band(
    window: &Window,
    width: u32,
    height: u32,
    max_iterations: u32,
    band: RowBand,
    palette: &dyn ColourMap,
) -> Result<Vec<u8>, RenderFrameError> {
    let mut bytes = Vec::with_capacity((band.row_count() * width * 3) as usize);

    for y in band.start..band.end {
        for x in 0..width {
            let point = pixel_to_plane(Pixel { x, y }, width, height, window)?;
            let iterations = escape_time(&point, max_iterations)?;
            let colour = palette.map(iterations)?;
            bytes.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }

    Ok(bytes)
}

pub(super) fn validate_request(
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Result<(), RenderFrameError> {
    if width == 0 || height == 0 {
        return Err(RenderFrameError::InvalidFrameSize { width, height });
    }
    if max_iterations == 0 {
        return Err(RenderFrameError::ZeroMaxIterations);
    }
    Ok(())
}

/// Renders a full frame of the plane region in `window` by splitting the rows
/// into bands and iterating each band on its own scoped thread. Bands are
/// reassembled in index order, so the output is byte-identical for any worker
/// count. Any band failure fails the whole render.
pub fn render_frame(
    window: &Window,
    width: u32,
    height: u32,
    max_iterations: u32,
    worker_count: NonZeroUsize,
    palette: &dyn ColourMap,
) -> Result<Frame, RenderFrameError> {
    validate_request(width, height, max_iterations)?;

    let bands = partition_rows(height, worker_count.get());

    let band_results = thread::scope(|scope| {
        let handles: Vec<_> = bands
            .iter()
            .map(|&band| {
                scope.spawn(move || render_band(window, width, height, max_iterations, band, palette))
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(band_index, handle)| {
                handle
                    .join()
                    .map_err(|_| RenderFrameError::WorkerPanicked { band_index })?
            })
            .collect::<Result<Vec<Vec<u8>>, RenderFrameError>>()
    })?;

    Ok(Frame::from_bands(width, height, max_iterations, band_results)?)
}
