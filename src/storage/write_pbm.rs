use crate::core::data::frame_buffer::FrameBuffer;
use std::io::Write;
use std::path::Path;

/// Writes a monochrome frame as a plain PBM (P1) image.
///
/// PBM uses 1 for black and 0 for white, which matches the display's
/// pixel encoding directly.
pub fn write_pbm(frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    writeln!(file, "P1")?;
    writeln!(file, "{} {}", frame.grid().width(), frame.grid().height())?;

    for row in frame.rows() {
        let line: Vec<String> = row.iter().map(|shade| shade.bit().to_string()).collect();
        writeln!(file, "{}", line.join(" "))?;
    }

    Ok(())
}
