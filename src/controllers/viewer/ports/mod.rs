pub mod button_source;
pub mod render_sink;
pub mod status;
pub mod ticker;
