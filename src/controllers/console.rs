use crate::adapters::log_status::LogStatus;
use crate::adapters::scripted_buttons::ScriptedButtons;
use crate::adapters::sleep_ticker::SleepTicker;
use crate::controllers::viewer::controller::ViewerController;
use crate::controllers::viewer::events::button::ButtonEvent;
use crate::controllers::viewer::poll_loop::run_viewer;
use crate::controllers::viewer::ports::render_sink::RenderSink;
use crate::core::actions::compute_frame::compute_frame::CoordStrategy;
use crate::core::data::grid_size::GridSize;
use crate::presenters::console::presenter::ConsolePresenter;
use log::info;
use std::time::Duration;

const DISPLAY_WIDTH: u32 = 84;
const DISPLAY_HEIGHT: u32 = 48;
const MAX_ITERATIONS: u32 = 50;
const CONTRAST: u8 = 0xBB;
const POLL_INTERVAL_MS: u64 = 100;

/// Runs a scripted viewer session against the console presenter.
///
/// Mirrors the device startup sequence: configure contrast, render the
/// initial centered view, then poll one button event per tick until the
/// script is exhausted.
pub fn console_viewer_controller(script: &[ButtonEvent]) -> Result<(), Box<dyn std::error::Error>> {
    let grid = GridSize::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)?;
    let presenter = ConsolePresenter::new(grid);

    info!(
        "starting viewer session: {}x{} grid, cap {}, {} scripted events",
        DISPLAY_WIDTH,
        DISPLAY_HEIGHT,
        MAX_ITERATIONS,
        script.len()
    );

    let mut controller =
        ViewerController::new(grid, MAX_ITERATIONS, CoordStrategy::Inline, presenter)?;
    controller.sink_mut().set_contrast(CONTRAST);

    let buttons = ScriptedButtons::new(script);
    let mut status = LogStatus::new();
    let mut ticker = SleepTicker::new(Duration::from_millis(POLL_INTERVAL_MS));

    run_viewer(
        &mut controller,
        &buttons,
        &mut status,
        &mut ticker,
        Some(script.len() as u64),
    )?;

    info!(
        "session complete: {} frames presented",
        controller.sink().presented_frames()
    );

    Ok(())
}
