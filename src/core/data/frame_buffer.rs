use crate::core::data::grid_size::GridSize;
use crate::core::data::shade::Shade;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    PixelOutsideGrid {
        col: u32,
        row: u32,
        grid: GridSize,
    },
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideGrid { col, row, grid } => {
                write!(
                    f,
                    "pixel (col: {}, row: {}) outside of {}x{} grid",
                    col,
                    row,
                    grid.width(),
                    grid.height()
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "shade buffer size {} does not match grid size {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// The complete binary pixel grid for one rendered view, stored row-major.
///
/// A frame is always fully written before it is handed to a sink; partial
/// frames never leave the compute stage.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    grid: GridSize,
    shades: Vec<Shade>,
}

impl FrameBuffer {
    /// Creates a frame with every pixel set to white.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            shades: vec![Shade::White; grid.pixel_count()],
        }
    }

    /// Builds a frame by evaluating `shade_at(col, row)` for every pixel
    /// in row-major order.
    #[must_use]
    pub fn from_fn(grid: GridSize, mut shade_at: impl FnMut(u32, u32) -> Shade) -> Self {
        let mut shades = Vec::with_capacity(grid.pixel_count());

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                shades.push(shade_at(col, row));
            }
        }

        Self { grid, shades }
    }

    pub fn from_shades(grid: GridSize, shades: Vec<Shade>) -> Result<Self, FrameBufferError> {
        if shades.len() != grid.pixel_count() {
            return Err(FrameBufferError::SizeMismatch {
                expected: grid.pixel_count(),
                actual: shades.len(),
            });
        }

        Ok(Self { grid, shades })
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn shades(&self) -> &[Shade] {
        &self.shades
    }

    #[must_use]
    pub fn shade_at(&self, col: u32, row: u32) -> Option<Shade> {
        if col >= self.grid.width() || row >= self.grid.height() {
            return None;
        }

        Some(self.shades[(row * self.grid.width() + col) as usize])
    }

    pub fn set_shade(&mut self, col: u32, row: u32, shade: Shade) -> Result<(), FrameBufferError> {
        if col >= self.grid.width() || row >= self.grid.height() {
            return Err(FrameBufferError::PixelOutsideGrid {
                col,
                row,
                grid: self.grid,
            });
        }

        self.shades[(row * self.grid.width() + col) as usize] = shade;
        Ok(())
    }

    /// Iterates over rows of the frame, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Shade]> {
        self.shades.chunks_exact(self.grid.width() as usize)
    }
}
