pub mod button;
pub mod latest_event;
