use crate::controllers::viewer::ports::status::StatusIndicator;
use log::trace;

/// Status indicator that reports heartbeat transitions through the log
/// facade instead of an LED.
#[derive(Debug, Default)]
pub struct LogStatus {
    active: bool,
}

impl LogStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl StatusIndicator for LogStatus {
    fn set_active(&mut self, on: bool) {
        self.active = on;
        trace!("heartbeat {}", if on { "on" } else { "off" });
    }
}
