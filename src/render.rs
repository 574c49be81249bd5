use crate::grid::BitGrid;
use crate::grid::CellState;

/// Symbols a frame is drawn with. The grid itself has no opinion on
/// formatting; callers pick the characters.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
    pub on: char,
    pub off: char,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self { on: 'O', off: '.' }
    }
}

/// Formats grids into text frames.
pub struct Renderer {
    options: PrintOptions,

    /// The frame buffer. Reused across frames so steady-state rendering
    /// does not allocate.
    fb: String,
}

impl Renderer {
    pub fn new(options: PrintOptions) -> Self {
        Self {
            options,
            fb: String::new(),
        }
    }

    /// Render one frame: one line per grid row, one symbol per cell, rows
    /// terminated by a newline.
    ///
    /// The returned frame borrows the internal buffer and is valid until
    /// the next call.
    pub fn render(&mut self, grid: &BitGrid) -> &str {
        self.fb.clear();

        for row in grid.rows() {
            for cell in row {
                self.fb.push(match cell {
                    CellState::On => self.options.on,
                    CellState::Off => self.options.off,
                });
            }

            self.fb.push('\n');
        }

        &self.fb
    }
}
