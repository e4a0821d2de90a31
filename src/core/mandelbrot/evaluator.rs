use crate::core::actions::compute_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotEvaluatorError {
    ZeroMaxIterations,
}

impl fmt::Display for MandelbrotEvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotEvaluatorError {}

/// Classic Mandelbrot escape-time recurrence `z ← z² + c` with a fixed
/// iteration cap and escape radius 2, tested as `|z|² ≥ 4` so the hot
/// loop never takes a square root.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotEvaluator {
    max_iterations: u32,
}

impl MandelbrotEvaluator {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotEvaluatorError> {
        if max_iterations == 0 {
            return Err(MandelbrotEvaluatorError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeAlgorithm for MandelbrotEvaluator {
    fn escape_count(&self, c: Complex) -> u32 {
        let mut z = Complex {
            real: 0.0,
            imag: 0.0,
        };

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() >= 4.0 {
                return iteration;
            }
            z = z * z + c;
        }

        self.max_iterations
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
