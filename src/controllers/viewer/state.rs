use crate::controllers::viewer::events::button::ButtonEvent;
use crate::core::data::grid_size::GridSize;
use crate::core::data::view_transform::{ViewTransform, ViewTransformError};

/// Zoom factor the view starts at.
pub const INITIAL_ZOOM: f64 = 0.1;
/// Horizontal pan distance per button press, in pixel units.
pub const PAN_STEP: f64 = 5.0;

/// The pan/zoom state owned by the viewer.
///
/// Transitions are plain arithmetic with no clamping: repeated zooming
/// or panning is allowed to walk the parameters as far as f64 carries
/// them. A scale that underflows to zero surfaces as a transform
/// construction error instead of a silently clamped view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    pan_offset: f64,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: INITIAL_ZOOM,
            pan_offset: 0.0,
        }
    }

    pub fn apply(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::ZoomIn => self.zoom *= 2.0,
            ButtonEvent::ZoomOut => self.zoom *= 0.5,
            ButtonEvent::PanLeft => self.pan_offset += PAN_STEP,
            ButtonEvent::PanRight => self.pan_offset -= PAN_STEP,
        }
    }

    /// Derives the full transform for a render pass: the screen-center
    /// offset combined with the accumulated user pan offset.
    pub fn transform_for(&self, grid: GridSize) -> Result<ViewTransform, ViewTransformError> {
        ViewTransform::new(
            self.zoom,
            f64::from(grid.width()) / 2.0 - self.pan_offset,
            f64::from(grid.height()) / 2.0,
        )
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan_offset(&self) -> f64 {
        self.pan_offset
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSize {
        GridSize::new(84, 48).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();

        assert_eq!(state.zoom(), INITIAL_ZOOM);
        assert_eq!(state.pan_offset(), 0.0);
    }

    #[test]
    fn test_initial_transform_is_centered() {
        let transform = ViewState::new().transform_for(grid()).unwrap();

        assert_eq!(transform.scale(), INITIAL_ZOOM);
        assert_eq!(transform.pan_x(), 42.0);
        assert_eq!(transform.pan_y(), 24.0);
    }

    #[test]
    fn test_zoom_in_doubles_scale() {
        let mut state = ViewState::new();

        state.apply(ButtonEvent::ZoomIn);

        assert_eq!(state.zoom(), INITIAL_ZOOM * 2.0);
    }

    #[test]
    fn test_zoom_out_halves_scale() {
        let mut state = ViewState::new();

        state.apply(ButtonEvent::ZoomOut);

        assert_eq!(state.zoom(), INITIAL_ZOOM * 0.5);
    }

    #[test]
    fn test_zoom_in_then_out_restores_scale() {
        let mut state = ViewState::new();

        state.apply(ButtonEvent::ZoomIn);
        state.apply(ButtonEvent::ZoomOut);

        assert_eq!(state.zoom(), INITIAL_ZOOM);
    }

    #[test]
    fn test_pan_left_then_right_restores_offset_exactly() {
        let mut state = ViewState::new();

        state.apply(ButtonEvent::PanLeft);
        state.apply(ButtonEvent::PanRight);

        assert_eq!(state.pan_offset(), 0.0);
    }

    #[test]
    fn test_pan_left_moves_the_pan_reference() {
        let mut state = ViewState::new();

        state.apply(ButtonEvent::PanLeft);

        assert_eq!(state.pan_offset(), PAN_STEP);
        assert_eq!(state.transform_for(grid()).unwrap().pan_x(), 42.0 - PAN_STEP);
    }

    #[test]
    fn test_pan_does_not_touch_zoom_and_vice_versa() {
        let mut state = ViewState::new();

        state.apply(ButtonEvent::PanLeft);
        assert_eq!(state.zoom(), INITIAL_ZOOM);

        state.apply(ButtonEvent::ZoomIn);
        assert_eq!(state.pan_offset(), PAN_STEP);
    }

    #[test]
    fn test_scale_underflow_surfaces_as_transform_error() {
        let mut state = ViewState::new();

        // enough halvings to drive an f64 scale to zero
        for _ in 0..1200 {
            state.apply(ButtonEvent::ZoomOut);
        }

        assert_eq!(state.zoom(), 0.0);
        assert!(state.transform_for(grid()).is_err());
    }
}
