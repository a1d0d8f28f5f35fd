use crate::core::actions::render_frame::bands::partition_rows;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_band, validate_request,
};
use crate::core::data::frame::Frame;
use crate::core::data::window::Window;
use rayon::prelude::*;
use std::num::NonZeroUsize;

/// Alternative scheduler that hands the row bands to rayon's work-stealing
/// pool instead of spawning scoped threads. `worker_count` only sets the band
/// count; rayon decides how the bands land on its pool threads. The output is
/// byte-identical to the scoped-thread renderer.
pub fn render_frame_rayon(
    window: &Window,
    width: u32,
    height: u32,
    max_iterations: u32,
    worker_count: NonZeroUsize,
    palette: &dyn ColourMap,
) -> Result<Frame, RenderFrameError> {
    validate_request(width, height, max_iterations)?;

    let bands = partition_rows(height, worker_count.get());

    let band_results = bands
        .par_iter()
        .map(|&band| render_band(window, width, height, max_iterations, band, palette))
        .collect::<Result<Vec<Vec<u8>>, RenderFrameError>>()?;

    Ok(Frame::from_bands(width, height, max_iterations, band_results)?)
}
