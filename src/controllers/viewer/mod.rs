//! Interactive viewer for the pan/zoom Mandelbrot display.
//!
//! Ports & adapters at the boundary: button input arrives through
//! [`ports::button_source::ButtonSource`], frames leave through
//! [`ports::render_sink::RenderSink`], and the single-threaded poll loop
//! in [`poll_loop`] ties them together.

pub mod controller;
pub mod events;
pub mod poll_loop;
pub mod ports;
pub mod state;

pub use controller::ViewerController;
pub use events::button::ButtonEvent;
pub use events::latest_event::LatestEventCell;
pub use poll_loop::{TickOutcome, run_viewer};
pub use state::ViewState;
