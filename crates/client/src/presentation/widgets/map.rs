//! Map widget: the world drawn through the core's display contract.

use game_core::{Canvas, World, draw_world};
use ratatui::{Frame, buffer::Buffer, layout::Rect};

/// [`Canvas`] over a region of a ratatui buffer. Out-of-region glyphs are
/// dropped.
pub struct BufferCanvas<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        Self { buffer, area }
    }
}

impl Canvas for BufferCanvas<'_> {
    fn put(&mut self, col: i32, row: i32, glyph: char) {
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        if let Some(cell) = self
            .buffer
            .cell_mut((self.area.x + col, self.area.y + row))
        {
            cell.set_char(glyph);
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, world: &World) {
    let mut canvas = BufferCanvas::new(frame.buffer_mut(), area);
    draw_world(world, &mut canvas);
}
