use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewTransformError {
    NonPositiveScale { scale: f64 },
}

impl fmt::Display for ViewTransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { scale } => {
                write!(f, "view scale must be positive, got {}", scale)
            }
        }
    }
}

impl Error for ViewTransformError {}

/// Affine parameters mapping pixel space into the complex plane.
///
/// Pan offsets are in pixel units before scaling, so zoom and pan compose
/// as independent linear operations on pixel space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
}

impl ViewTransform {
    pub fn new(scale: f64, pan_x: f64, pan_y: f64) -> Result<Self, ViewTransformError> {
        if !(scale > 0.0) {
            return Err(ViewTransformError::NonPositiveScale { scale });
        }

        Ok(Self {
            scale,
            pan_x,
            pan_y,
        })
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_transform_new_valid() {
        let transform = ViewTransform::new(0.1, 42.0, 24.0).unwrap();

        assert_eq!(transform.scale(), 0.1);
        assert_eq!(transform.pan_x(), 42.0);
        assert_eq!(transform.pan_y(), 24.0);
    }

    #[test]
    fn test_view_transform_rejects_zero_scale() {
        assert_eq!(
            ViewTransform::new(0.0, 0.0, 0.0),
            Err(ViewTransformError::NonPositiveScale { scale: 0.0 })
        );
    }

    #[test]
    fn test_view_transform_rejects_negative_scale() {
        assert_eq!(
            ViewTransform::new(-0.5, 0.0, 0.0),
            Err(ViewTransformError::NonPositiveScale { scale: -0.5 })
        );
    }

    #[test]
    fn test_view_transform_rejects_nan_scale() {
        let result = ViewTransform::new(f64::NAN, 0.0, 0.0);

        assert!(result.is_err());
    }

    #[test]
    fn test_negative_pan_offsets_are_allowed() {
        let transform = ViewTransform::new(1.0, -10.0, -20.0).unwrap();

        assert_eq!(transform.pan_x(), -10.0);
        assert_eq!(transform.pan_y(), -20.0);
    }
}
