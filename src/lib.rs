mod adapters;
mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::console::console_viewer_controller;
pub use controllers::snapshot::snapshot_controller;
pub use controllers::viewer::{
    ButtonEvent, LatestEventCell, TickOutcome, ViewState, ViewerController, run_viewer,
};
pub use controllers::viewer::ports::button_source::ButtonSource;
pub use controllers::viewer::ports::render_sink::RenderSink;
pub use controllers::viewer::ports::status::StatusIndicator;
pub use controllers::viewer::ports::ticker::Ticker;

pub use adapters::scripted_buttons::ScriptedButtons;
pub use adapters::sleep_ticker::SleepTicker;
pub use presenters::console::presenter::ConsolePresenter;
pub use storage::write_pbm::write_pbm;

pub use crate::core::actions::compute_frame::compute_frame::{CoordStrategy, compute_frame};
pub use crate::core::actions::compute_frame::ports::escape_algorithm::EscapeAlgorithm;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::shade::Shade;
pub use crate::core::data::view_transform::ViewTransform;
pub use crate::core::mandelbrot::evaluator::MandelbrotEvaluator;
pub use crate::core::mandelbrot::threshold::IterationThreshold;
pub use crate::core::util::pixel_to_complex::pixel_to_complex;
