pub mod log_status;
pub mod scripted_buttons;
pub mod sleep_ticker;
