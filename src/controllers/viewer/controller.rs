use crate::controllers::viewer::events::button::ButtonEvent;
use crate::controllers::viewer::ports::render_sink::RenderSink;
use crate::controllers::viewer::state::ViewState;
use crate::core::actions::compute_frame::compute_frame::{CoordStrategy, compute_frame};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::grid_size::GridSize;
use crate::core::data::shade::Shade;
use crate::core::data::view_transform::ViewTransformError;
use crate::core::mandelbrot::evaluator::{MandelbrotEvaluator, MandelbrotEvaluatorError};
use crate::core::mandelbrot::threshold::{IterationThreshold, IterationThresholdError};
use log::debug;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewerControllerError {
    Evaluator(MandelbrotEvaluatorError),
    Threshold(IterationThresholdError),
}

impl fmt::Display for ViewerControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluator(err) => write!(f, "evaluator setup failed: {}", err),
            Self::Threshold(err) => write!(f, "threshold setup failed: {}", err),
        }
    }
}

impl Error for ViewerControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Evaluator(err) => Some(err),
            Self::Threshold(err) => Some(err),
        }
    }
}

impl From<MandelbrotEvaluatorError> for ViewerControllerError {
    fn from(err: MandelbrotEvaluatorError) -> Self {
        Self::Evaluator(err)
    }
}

impl From<IterationThresholdError> for ViewerControllerError {
    fn from(err: IterationThresholdError) -> Self {
        Self::Threshold(err)
    }
}

/// Owns the view state and drives the render pipeline: button event →
/// state mutation → full-frame recompute → clear, blit, present.
pub struct ViewerController<S: RenderSink> {
    state: ViewState,
    grid: GridSize,
    evaluator: MandelbrotEvaluator,
    threshold: IterationThreshold,
    strategy: CoordStrategy,
    sink: S,
}

impl<S: RenderSink> ViewerController<S> {
    pub fn new(
        grid: GridSize,
        max_iterations: u32,
        strategy: CoordStrategy,
        sink: S,
    ) -> Result<Self, ViewerControllerError> {
        Ok(Self {
            state: ViewState::new(),
            grid,
            evaluator: MandelbrotEvaluator::new(max_iterations)?,
            threshold: IterationThreshold::new(max_iterations)?,
            strategy,
            sink,
        })
    }

    /// Applies one button event and re-renders the whole view.
    pub fn handle_event(&mut self, event: ButtonEvent) -> Result<(), ViewTransformError> {
        self.state.apply(event);
        self.render()
    }

    /// Recomputes the frame for the current state and publishes it.
    ///
    /// The frame is complete before the first pixel reaches the sink, so
    /// the display never observes a partially rendered view.
    pub fn render(&mut self) -> Result<(), ViewTransformError> {
        let transform = self.state.transform_for(self.grid)?;

        let start = Instant::now();
        let frame = compute_frame(
            self.grid,
            transform,
            &self.evaluator,
            &self.threshold,
            self.strategy,
        );
        debug!(
            "computed {}x{} frame at scale {} in {:?}",
            self.grid.width(),
            self.grid.height(),
            transform.scale(),
            start.elapsed()
        );

        self.sink.clear(Shade::White);
        blit(&frame, &mut self.sink);
        self.sink.present();

        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

fn blit<S: RenderSink>(frame: &FrameBuffer, sink: &mut S) {
    for (row, shades) in frame.rows().enumerate() {
        for (col, &shade) in shades.iter().enumerate() {
            sink.set_pixel(col as u32, row as u32, shade);
        }
    }
}
