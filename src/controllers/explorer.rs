use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::frame::Frame;
use crate::core::data::pixel::Pixel;
use crate::core::data::precision::Precision;
use crate::core::data::window::Window;
use crate::core::fractals::mandelbrot::colour_maps::factory::create_palette;
use crate::core::fractals::mandelbrot::colour_maps::kinds::PaletteKind;
use crate::core::navigation::centred::CentredNavigator;
use crate::core::navigation::corner::CornerNavigator;
use crate::core::navigation::{NavigationError, Navigator};
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

/// Everything a render needs besides the viewport. `worker_count: None`
/// falls back to the machine's available parallelism.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub precision: Precision,
    pub worker_count: Option<NonZeroUsize>,
    pub palette: PaletteKind,
}

impl RenderRequest {
    #[must_use]
    pub fn resolved_workers(&self) -> NonZeroUsize {
        self.worker_count.unwrap_or_else(|| {
            thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
        })
    }
}

#[derive(Debug, PartialEq)]
pub enum ExplorerError {
    Navigation(NavigationError),
    Render(RenderFrameError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation(_) => write!(f, "navigation failed"),
            Self::Render(_) => write!(f, "rendering failed"),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Navigation(source) => Some(source),
            Self::Render(source) => Some(source),
        }
    }
}

impl From<NavigationError> for ExplorerError {
    fn from(error: NavigationError) -> Self {
        Self::Navigation(error)
    }
}

impl From<RenderFrameError> for ExplorerError {
    fn from(error: RenderFrameError) -> Self {
        Self::Render(error)
    }
}

/// Ties a viewport navigator to a render request. Callers steer with pixel
/// coordinates and pull finished frames; precision, palette and scheduling
/// stay behind this interface.
#[derive(Debug)]
pub struct Explorer {
    request: RenderRequest,
    navigator: Navigator,
}

impl Explorer {
    /// An explorer with corner-tracked navigation.
    pub fn corner(request: RenderRequest, factor: f64) -> Result<Self, ExplorerError> {
        let navigator = Navigator::Corner(CornerNavigator::new(
            factor,
            request.width,
            request.height,
            request.precision,
        )?);

        Ok(Self { request, navigator })
    }

    /// An explorer with centre-plus-level navigation, starting at the home
    /// view.
    pub fn centred(request: RenderRequest, factor: f64) -> Result<Self, ExplorerError> {
        let navigator = Navigator::Centred(CentredNavigator::new(
            factor,
            request.width,
            request.height,
            request.precision,
        )?);

        Ok(Self { request, navigator })
    }

    /// An explorer resuming a saved centred location.
    pub fn centred_from_seeds(
        request: RenderRequest,
        factor: f64,
        re: &str,
        im: &str,
        zoom_level: i32,
    ) -> Result<Self, ExplorerError> {
        let navigator = Navigator::Centred(CentredNavigator::from_seeds(
            re,
            im,
            zoom_level,
            factor,
            request.width,
            request.height,
            request.precision,
        )?);

        Ok(Self { request, navigator })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        self.navigator.window()
    }

    pub fn zoom_in(&mut self, x: u32, y: u32) -> Result<(), ExplorerError> {
        Ok(self.navigator.zoom_in(Pixel { x, y })?)
    }

    pub fn zoom_out(&mut self, x: u32, y: u32) -> Result<(), ExplorerError> {
        Ok(self.navigator.zoom_out(Pixel { x, y })?)
    }

    pub fn reset(&mut self) {
        self.navigator.reset();
    }

    /// Renders the current viewport into a frame.
    pub fn render(&self) -> Result<Frame, ExplorerError> {
        let palette = create_palette(self.request.palette, self.request.max_iterations);

        Ok(render_frame(
            self.navigator.window(),
            self.request.width,
            self.request.height,
            self.request.max_iterations,
            self.request.resolved_workers(),
            palette.as_ref(),
        )?)
    }
}
