use crate::controllers::viewer::controller::ViewerController;
use crate::controllers::viewer::ports::button_source::ButtonSource;
use crate::controllers::viewer::ports::render_sink::RenderSink;
use crate::controllers::viewer::ports::status::StatusIndicator;
use crate::controllers::viewer::ports::ticker::Ticker;
use crate::core::data::view_transform::ViewTransformError;

/// What a single poll tick did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    Idle,
}

impl<S: RenderSink> ViewerController<S> {
    /// One poll step: consume the latest pending button event, if any,
    /// and re-render when something was consumed.
    pub fn tick(
        &mut self,
        buttons: &impl ButtonSource,
    ) -> Result<TickOutcome, ViewTransformError> {
        match buttons.take_latest() {
            Some(event) => {
                self.handle_event(event)?;
                Ok(TickOutcome::Rendered)
            }
            None => Ok(TickOutcome::Idle),
        }
    }
}

/// Single-threaded cooperative viewer loop.
///
/// Renders the initial view once, then on every tick toggles the status
/// indicator, polls for one button event and waits out the fixed delay
/// interval. `max_ticks` is `None` to run indefinitely; a budget makes
/// scripted sessions and tests terminate.
pub fn run_viewer<S: RenderSink>(
    controller: &mut ViewerController<S>,
    buttons: &impl ButtonSource,
    status: &mut impl StatusIndicator,
    ticker: &mut impl Ticker,
    max_ticks: Option<u64>,
) -> Result<(), ViewTransformError> {
    controller.render()?;

    let mut heartbeat = false;
    let mut ticks: u64 = 0;

    loop {
        if max_ticks.is_some_and(|limit| ticks >= limit) {
            return Ok(());
        }

        heartbeat = !heartbeat;
        status.set_active(heartbeat);

        controller.tick(buttons)?;

        ticker.wait();
        ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scripted_buttons::ScriptedButtons;
    use crate::controllers::viewer::events::button::ButtonEvent;
    use crate::core::actions::compute_frame::compute_frame::CoordStrategy;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::shade::Shade;

    #[derive(Default)]
    struct CountingSink {
        presents: u32,
    }

    impl RenderSink for CountingSink {
        fn clear(&mut self, _background: Shade) {}

        fn set_pixel(&mut self, _x: u32, _y: u32, _shade: Shade) {}

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    #[derive(Default)]
    struct RecordingStatus {
        states: Vec<bool>,
    }

    impl StatusIndicator for RecordingStatus {
        fn set_active(&mut self, on: bool) {
            self.states.push(on);
        }
    }

    #[derive(Default)]
    struct NoopTicker {
        waits: u32,
    }

    impl Ticker for NoopTicker {
        fn wait(&mut self) {
            self.waits += 1;
        }
    }

    fn controller() -> ViewerController<CountingSink> {
        let grid = GridSize::new(6, 4).unwrap();
        ViewerController::new(grid, 50, CoordStrategy::Inline, CountingSink::default()).unwrap()
    }

    #[test]
    fn test_idle_tick_does_not_rerender() {
        let mut controller = controller();
        let buttons = ScriptedButtons::new(&[]);

        let outcome = controller.tick(&buttons).unwrap();

        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(controller.sink().presents, 0);
    }

    #[test]
    fn test_event_tick_rerenders() {
        let mut controller = controller();
        let buttons = ScriptedButtons::new(&[ButtonEvent::ZoomIn]);

        let outcome = controller.tick(&buttons).unwrap();

        assert_eq!(outcome, TickOutcome::Rendered);
        assert_eq!(controller.sink().presents, 1);
    }

    #[test]
    fn test_loop_renders_initial_frame_even_with_zero_ticks() {
        let mut controller = controller();
        let buttons = ScriptedButtons::new(&[]);
        let mut status = RecordingStatus::default();
        let mut ticker = NoopTicker::default();

        run_viewer(&mut controller, &buttons, &mut status, &mut ticker, Some(0)).unwrap();

        assert_eq!(controller.sink().presents, 1);
        assert!(status.states.is_empty());
        assert_eq!(ticker.waits, 0);
    }

    #[test]
    fn test_loop_processes_one_event_per_tick() {
        let mut controller = controller();
        let buttons = ScriptedButtons::new(&[ButtonEvent::ZoomIn, ButtonEvent::PanLeft]);
        let mut status = RecordingStatus::default();
        let mut ticker = NoopTicker::default();

        run_viewer(&mut controller, &buttons, &mut status, &mut ticker, Some(4)).unwrap();

        // initial render plus one per scripted event
        assert_eq!(controller.sink().presents, 3);
        assert_eq!(ticker.waits, 4);
    }

    #[test]
    fn test_status_indicator_toggles_every_tick() {
        let mut controller = controller();
        let buttons = ScriptedButtons::new(&[]);
        let mut status = RecordingStatus::default();
        let mut ticker = NoopTicker::default();

        run_viewer(&mut controller, &buttons, &mut status, &mut ticker, Some(4)).unwrap();

        assert_eq!(status.states, vec![true, false, true, false]);
    }

    #[test]
    fn test_loop_waits_once_per_tick_even_when_rendering() {
        let mut controller = controller();
        let buttons = ScriptedButtons::new(&[ButtonEvent::ZoomOut]);
        let mut status = RecordingStatus::default();
        let mut ticker = NoopTicker::default();

        run_viewer(&mut controller, &buttons, &mut status, &mut ticker, Some(2)).unwrap();

        assert_eq!(ticker.waits, 2);
    }
}
