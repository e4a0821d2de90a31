use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    EmptyGrid { width: u32, height: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid dimensions must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for GridSizeError {}

/// Fixed pixel dimensions of the target display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::EmptyGrid { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
