use crate::core::actions::compute_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::grid_size::GridSize;
use crate::core::data::view_transform::ViewTransform;
use crate::core::mandelbrot::threshold::IterationThreshold;
use crate::core::util::pixel_to_complex::pixel_to_complex;

/// Where pixel coordinates are turned into complex-plane points.
///
/// `Inline` computes each point inside the per-pixel loop; `Precomputed`
/// materializes the whole coordinate grid first. Output is bit-identical
/// either way; inline is the default since every render here follows a
/// transform change, so precomputed coordinates are never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CoordStrategy {
    #[default]
    Inline,
    Precomputed,
}

/// Computes one full frame for the given view: coordinates, escape
/// counts and the binary threshold, over every pixel in row-major order.
#[must_use]
pub fn compute_frame<Alg: EscapeAlgorithm>(
    grid: GridSize,
    transform: ViewTransform,
    algorithm: &Alg,
    threshold: &IterationThreshold,
    strategy: CoordStrategy,
) -> FrameBuffer {
    match strategy {
        CoordStrategy::Inline => compute_frame_inline(grid, transform, algorithm, threshold),
        CoordStrategy::Precomputed => {
            compute_frame_precomputed(grid, transform, algorithm, threshold)
        }
    }
}

fn compute_frame_inline<Alg: EscapeAlgorithm>(
    grid: GridSize,
    transform: ViewTransform,
    algorithm: &Alg,
    threshold: &IterationThreshold,
) -> FrameBuffer {
    FrameBuffer::from_fn(grid, |col, row| {
        let c = pixel_to_complex(col, row, transform);
        threshold.classify(algorithm.escape_count(c))
    })
}

fn compute_frame_precomputed<Alg: EscapeAlgorithm>(
    grid: GridSize,
    transform: ViewTransform,
    algorithm: &Alg,
    threshold: &IterationThreshold,
) -> FrameBuffer {
    let coords = precompute_coords(grid, transform);

    FrameBuffer::from_fn(grid, |col, row| {
        let c = coords[(row * grid.width() + col) as usize];
        threshold.classify(algorithm.escape_count(c))
    })
}

fn precompute_coords(grid: GridSize, transform: ViewTransform) -> Vec<Complex> {
    let mut coords = Vec::with_capacity(grid.pixel_count());

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            coords.push(pixel_to_complex(col, row, transform));
        }
    }

    coords
}
