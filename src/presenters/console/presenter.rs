use crate::controllers::viewer::ports::render_sink::RenderSink;
use crate::core::data::grid_size::GridSize;
use crate::core::data::shade::Shade;
use log::debug;

/// Render sink that stages a frame in memory and prints it to stdout on
/// `present`, one text row per pixel row.
///
/// Pixels outside the configured grid are dropped; the console has no
/// surface for them.
pub struct ConsolePresenter {
    grid: GridSize,
    cells: Vec<Shade>,
    presented_frames: u64,
}

impl ConsolePresenter {
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            cells: vec![Shade::White; grid.pixel_count()],
            presented_frames: 0,
        }
    }

    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    /// Renders the staged frame as text, one `String` per pixel row.
    #[must_use]
    pub fn frame_lines(&self) -> Vec<String> {
        self.cells
            .chunks_exact(self.grid.width() as usize)
            .map(|row| {
                row.iter()
                    .map(|shade| if shade.is_black() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl RenderSink for ConsolePresenter {
    fn clear(&mut self, background: Shade) {
        self.cells.fill(background);
    }

    fn set_pixel(&mut self, x: u32, y: u32, shade: Shade) {
        if x >= self.grid.width() || y >= self.grid.height() {
            return;
        }

        self.cells[(y * self.grid.width() + x) as usize] = shade;
    }

    fn present(&mut self) {
        self.presented_frames += 1;

        for line in self.frame_lines() {
            println!("{}", line);
        }
        println!();
    }

    fn set_contrast(&mut self, level: u8) {
        debug!("contrast request 0x{:02X} ignored by console output", level);
    }
}
