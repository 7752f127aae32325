//! Drawing frames into a ratatui buffer.
//!
//! Blank cells are transparent: only non-space characters are written, so a
//! foreground layer rendered after a background layer lets it show through.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use warren_core::Frame;

/// Write `frame` with its top-left corner at (`x`, `y`) relative to `area`,
/// clipped to `area`. Spaces are skipped.
pub fn draw_sprite(buf: &mut Buffer, area: Rect, frame: &Frame, x: i32, y: i32, style: Style) {
    for (row, line) in frame.lines().enumerate() {
        let cy = y + row as i32;
        if cy < 0 || cy >= area.height as i32 {
            continue;
        }
        for (col, ch) in line.chars().enumerate() {
            let cx = x + col as i32;
            if ch == ' ' || cx < 0 || cx >= area.width as i32 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + cx as u16, area.y + cy as u16)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}

/// A single frame, centered horizontally and resting on the bottom edge.
#[derive(Debug, Clone)]
pub struct SpriteWidget {
    frame: Frame,
    style: Style,
}

impl SpriteWidget {
    pub fn new(frame: Frame, style: Style) -> Self {
        Self { frame, style }
    }
}

impl Widget for SpriteWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let x = (area.width as i32 - self.frame.width() as i32) / 2;
        let y = area.height as i32 - self.frame.height() as i32;
        draw_sprite(buf, area, &self.frame, x, y, self.style);
    }
}

/// A frame repeated edge to edge, shifted left by `offset` columns and
/// resting on the bottom edge.
#[derive(Debug, Clone)]
pub struct TiledWidget {
    frame: Frame,
    span: usize,
    offset: usize,
    style: Style,
}

impl TiledWidget {
    /// `span` is the tile pitch; it should be at least the frame width.
    pub fn new(frame: Frame, span: usize, offset: usize, style: Style) -> Self {
        Self {
            frame,
            span,
            offset,
            style,
        }
    }
}

impl Widget for TiledWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.span == 0 {
            return;
        }
        let span = self.span as i32;
        let y = area.height as i32 - self.frame.height() as i32;
        let mut x = -((self.offset % self.span) as i32);
        while x < area.width as i32 {
            draw_sprite(buf, area, &self.frame, x, y, self.style);
            x += span;
        }
    }
}
