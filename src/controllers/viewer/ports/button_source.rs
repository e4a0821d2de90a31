use crate::controllers::viewer::events::button::ButtonEvent;

/// Polled input surface: hands out the most recent pending button event,
/// clearing it in the same step.
pub trait ButtonSource {
    fn take_latest(&self) -> Option<ButtonEvent>;
}
