use crate::core::data::shade::Shade;

/// Output surface for completed frames.
///
/// Pixels arrive one at a time in row-major order after a full frame has
/// been computed; `present` flushes the staged frame to the device.
pub trait RenderSink {
    fn clear(&mut self, background: Shade);

    fn set_pixel(&mut self, x: u32, y: u32, shade: Shade);

    fn present(&mut self);

    /// One-time display configuration, outside the render loop.
    fn set_contrast(&mut self, level: u8) {
        let _ = level;
    }
}
