use crate::core::data::shade::Shade;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationThresholdError {
    ZeroMaxIterations,
}

impl fmt::Display for IterationThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for IterationThresholdError {}

/// Maps an escape count to a binary pixel decision.
///
/// The policy is round-half-up on the normalized count: a ratio of
/// exactly 0.5 classifies as black. Kept explicit so alternate
/// implementations cannot diverge at the boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationThreshold {
    max_iterations: u32,
}

impl IterationThreshold {
    pub fn new(max_iterations: u32) -> Result<Self, IterationThresholdError> {
        if max_iterations == 0 {
            return Err(IterationThresholdError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn classify(&self, iterations: u32) -> Shade {
        let ratio = f64::from(iterations) / f64::from(self.max_iterations);

        if ratio >= 0.5 {
            Shade::Black
        } else {
            Shade::White
        }
    }
}
