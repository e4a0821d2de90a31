/// Heartbeat indicator toggled once per poll tick (an LED on the
/// original hardware).
pub trait StatusIndicator {
    fn set_active(&mut self, on: bool);
}
