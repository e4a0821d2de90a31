use crate::core::data::complex::Complex;

/// Escape-time evaluation for a single point of the complex plane.
///
/// Implementations must terminate within `max_iterations()` recurrence
/// steps and return the iteration index at which the point escaped, or
/// the cap if it never did.
pub trait EscapeAlgorithm {
    fn escape_count(&self, c: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
