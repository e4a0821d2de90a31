use crate::controllers::viewer::events::button::ButtonEvent;
use crate::controllers::viewer::ports::button_source::ButtonSource;
use std::sync::atomic::{AtomicU8, Ordering};

const EMPTY: u8 = 0;

/// A one-slot "latest event" cell.
///
/// Holds at most one pending button event. Posting overwrites whatever
/// is pending; taking clears the slot atomically, so an event is
/// consumed exactly once even when an input thread posts concurrently.
/// If several events arrive between polls only the most recent survives.
#[derive(Debug, Default)]
pub struct LatestEventCell {
    slot: AtomicU8,
}

impl LatestEventCell {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: AtomicU8::new(EMPTY),
        }
    }

    pub fn post(&self, event: ButtonEvent) {
        self.slot.store(event.code(), Ordering::Release);
    }

    pub fn take(&self) -> Option<ButtonEvent> {
        ButtonEvent::from_code(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot.load(Ordering::Acquire) != EMPTY
    }
}

impl ButtonSource for LatestEventCell {
    fn take_latest(&self) -> Option<ButtonEvent> {
        self.take()
    }
}
