use crate::core::data::complex::Complex;
use crate::core::data::view_transform::ViewTransform;

/// Maps a pixel position to its point in the complex plane under the
/// current view transform.
///
/// The map is affine in both pixel coordinates: it subtracts the pan
/// offsets (in pixel units) and then applies the zoom scale. Total
/// function; any pixel index is a valid input.
#[must_use]
pub fn pixel_to_complex(col: u32, row: u32, transform: ViewTransform) -> Complex {
    Complex {
        real: (f64::from(col) - transform.pan_x()) * transform.scale(),
        imag: (f64::from(row) - transform.pan_y()) * transform.scale(),
    }
}
