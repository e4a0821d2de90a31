use crate::controllers::viewer::events::button::ButtonEvent;
use crate::controllers::viewer::ports::button_source::ButtonSource;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Button source that replays a fixed script, one event per poll.
///
/// Stands in for the hardware buttons in demo sessions and tests.
pub struct ScriptedButtons {
    script: RefCell<VecDeque<ButtonEvent>>,
}

impl ScriptedButtons {
    #[must_use]
    pub fn new(events: &[ButtonEvent]) -> Self {
        Self {
            script: RefCell::new(events.iter().copied().collect()),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl ButtonSource for ScriptedButtons {
    fn take_latest(&self) -> Option<ButtonEvent> {
        self.script.borrow_mut().pop_front()
    }
}
