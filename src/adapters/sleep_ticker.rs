use crate::controllers::viewer::ports::ticker::Ticker;
use std::time::Duration;

/// Ticker backed by `thread::sleep`, standing in for the fixed
/// millisecond delay of the original poll loop.
#[derive(Debug, Copy, Clone)]
pub struct SleepTicker {
    interval: Duration,
}

impl SleepTicker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self) {
        std::thread::sleep(self.interval);
    }
}
