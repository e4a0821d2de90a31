pub mod complex;
pub mod frame_buffer;
pub mod grid_size;
pub mod shade;
pub mod view_transform;
