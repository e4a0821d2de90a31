use crate::controllers::viewer::state::ViewState;
use crate::core::actions::compute_frame::compute_frame::{CoordStrategy, compute_frame};
use crate::core::data::grid_size::GridSize;
use crate::core::mandelbrot::evaluator::MandelbrotEvaluator;
use crate::core::mandelbrot::threshold::IterationThreshold;
use crate::storage::write_pbm::write_pbm;
use log::info;
use std::path::Path;
use std::time::Instant;

/// Renders the default centered view once and writes it as a PBM image.
pub fn snapshot_controller(filepath: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let grid = GridSize::new(84, 48)?;
    let max_iterations = 50;

    let evaluator = MandelbrotEvaluator::new(max_iterations)?;
    let threshold = IterationThreshold::new(max_iterations)?;
    let transform = ViewState::new().transform_for(grid)?;

    let start = Instant::now();
    let frame = compute_frame(grid, transform, &evaluator, &threshold, CoordStrategy::Inline);
    info!(
        "snapshot frame computed in {:?}, writing to {}",
        start.elapsed(),
        filepath.as_ref().display()
    );

    write_pbm(&frame, filepath)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_writes_a_pbm_file() {
        let path = std::env::temp_dir().join(format!(
            "lcd_mandelbrot_snapshot_{}.pbm",
            std::process::id()
        ));

        let result = snapshot_controller(&path);
        assert!(result.is_ok());

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(contents.starts_with("P1\n84 48\n"));
        // 2 header lines plus one line per pixel row
        assert_eq!(contents.lines().count(), 50);
    }
}
