//! # Terminal Surface
//!
//! Implements the canvas [`Surface`] over a ratatui [`Buffer`] by treating
//! every terminal cell as a block of logical pixels.
//!
//! ```text
//! cell width  = CELL_WIDTH px        (one column of text = one cell)
//! cell height = line spacing px      (one wrapped line  = one row)
//! canvas      = columns * CELL_WIDTH  x  rows * cell height
//! ```
//!
//! Because line spacing scales with canvas width, the cell height is derived
//! from the column count. Fills set cell backgrounds, text sets symbols and
//! foregrounds on top of whatever background is already there. Strokes set
//! the stroke colour as foreground on the cells they cross and reverse them,
//! so the line shows as a block in that colour.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color as CellColor, Modifier};
use unicode_width::UnicodeWidthChar;

use crate::canvas::metrics::LayoutMetrics;
use crate::canvas::{Color, Font, Point, Rect, Size, Surface, TextAlign};

/// Logical pixels per terminal column.
pub const CELL_WIDTH: f32 = 4.0;

pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: CellRect,
    cell_height: f32,
    bold: bool,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: CellRect) -> Self {
        let width = area.width as f32 * CELL_WIDTH;
        let cell_height = LayoutMetrics::for_width(width).line_spacing.max(1.0);
        Self {
            buf,
            area,
            cell_height,
            bold: false,
        }
    }

    fn col(&self, x: f32) -> i32 {
        (x / CELL_WIDTH).round() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / self.cell_height).round() as i32
    }

    /// Buffer position of a canvas cell, or `None` when clipped.
    fn cell_pos(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        let in_bounds = col >= 0
            && row >= 0
            && (col as u32) < self.area.width as u32
            && (row as u32) < self.area.height as u32;
        in_bounds.then(|| (self.area.x + col as u16, self.area.y + row as u16))
    }

    fn paint_cell(&mut self, col: i32, row: i32, color: Color) {
        if let Some(pos) = self.cell_pos(col, row)
            && let Some(cell) = self.buf.cell_mut(pos)
        {
            cell.reset();
            cell.set_bg(to_cell_color(color));
        }
    }

    /// Column and row ranges (end exclusive) covered by `rect`.
    fn cell_span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        (
            self.col(rect.x),
            self.col(rect.right()),
            self.row(rect.y),
            self.row(rect.bottom()),
        )
    }
}

fn to_cell_color(color: Color) -> CellColor {
    CellColor::Rgb(color.r, color.g, color.b)
}

impl Surface for TerminalSurface<'_> {
    fn size(&self) -> Size {
        Size::new(
            self.area.width as f32 * CELL_WIDTH,
            self.area.height as f32 * self.cell_height,
        )
    }

    fn set_font(&mut self, font: Font) {
        self.bold = font.bold;
    }

    fn measure_text(&self, text: &str) -> f32 {
        textwrap::core::display_width(text) as f32 * CELL_WIDTH
    }

    fn clear(&mut self) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (c0, c1, r0, r1) = self.cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.paint_cell(col, row, color);
            }
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let (c0, c1, r0, r1) = self.cell_span(rect);
        // Corners only read as rounded on blocks of at least 2x2 cells.
        let round = radius > 0.0 && c1 - c0 >= 2 && r1 - r0 >= 2;
        for row in r0..r1 {
            for col in c0..c1 {
                let corner = (col == c0 || col == c1 - 1) && (row == r0 || row == r1 - 1);
                if round && corner {
                    continue;
                }
                self.paint_cell(col, row, color);
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Color) {
        let width = textwrap::core::display_width(text) as i32;
        let mut col = match align {
            TextAlign::Left => self.col(x),
            TextAlign::Right => self.col(x) - width,
        };
        let row = self.row(y);
        let fg = to_cell_color(color);
        let bold = self.bold;

        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if let Some(pos) = self.cell_pos(col, row)
                && let Some(cell) = self.buf.cell_mut(pos)
            {
                cell.set_char(ch).set_fg(fg);
                if bold {
                    cell.modifier.insert(Modifier::BOLD);
                }
            }
            col += w;
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        // Rows use the same rounding as text so a cursor lands on its line.
        let (c0, r0) = (self.col(from.x), self.row(from.y));
        let (c1, r1) = (self.col(to.x), (self.row(to.y) - 1).max(r0));
        let steps = (c1 - c0).abs().max(r1 - r0).max(0);
        let fg = to_cell_color(color);
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let col = c0 + ((c1 - c0) as f32 * t).round() as i32;
            let row = r0 + ((r1 - r0) as f32 * t).round() as i32;
            if let Some(pos) = self.cell_pos(col, row)
                && let Some(cell) = self.buf.cell_mut(pos)
            {
                cell.set_fg(fg);
                cell.modifier.insert(Modifier::REVERSED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_rows;

    fn buffer(cols: u16, rows: u16) -> Buffer {
        Buffer::empty(CellRect::new(0, 0, cols, rows))
    }

    #[test]
    fn test_size_scales_with_columns() {
        let mut buf = buffer(80, 10);
        let area = buf.area;
        let surface = TerminalSurface::new(&mut buf, area);
        // 80 cols * 4 = 320 px wide, line spacing 15 px at that width.
        assert_eq!(surface.size(), Size::new(320.0, 150.0));
        assert_eq!(surface.measure_text("hello"), 20.0);
        assert_eq!(surface.measure_text("日本"), 16.0);
    }

    #[test]
    fn test_fill_rect_sets_background() {
        let mut buf = buffer(80, 10);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        surface.fill_rect(Rect::new(8.0, 15.0, 8.0, 30.0), Color::BLUE);

        let blue = CellColor::Rgb(0, 0, 0xff);
        assert_eq!(buf[(2, 1)].bg, blue);
        assert_eq!(buf[(3, 2)].bg, blue);
        assert_ne!(buf[(4, 1)].bg, blue);
        assert_ne!(buf[(2, 3)].bg, blue);
    }

    #[test]
    fn test_rounded_rect_skips_corners() {
        let mut buf = buffer(80, 10);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        surface.fill_rounded_rect(Rect::new(0.0, 0.0, 16.0, 45.0), 4.0, Color::BLUE);

        let blue = CellColor::Rgb(0, 0, 0xff);
        assert_ne!(buf[(0, 0)].bg, blue);
        assert_ne!(buf[(3, 2)].bg, blue);
        assert_eq!(buf[(1, 0)].bg, blue);
        assert_eq!(buf[(0, 1)].bg, blue);
    }

    #[test]
    fn test_text_left_and_right_aligned() {
        let mut buf = buffer(20, 3);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        surface.fill_text("hi", 4.0, 0.0, TextAlign::Left, Color::BLACK);
        surface.fill_text("yo", 80.0, 0.0, TextAlign::Right, Color::BLACK);

        assert_eq!(buffer_rows(&buf)[0], " hi               yo");
    }

    #[test]
    fn test_text_keeps_background_and_applies_bold() {
        let mut buf = buffer(20, 3);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        surface.fill_rect(Rect::new(0.0, 0.0, 80.0, 3.75), Color::BLUE);
        surface.set_font(Font::bold(22.0));
        surface.fill_text("T", 0.0, 0.0, TextAlign::Left, Color::WHITE);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "T");
        assert_eq!(cell.bg, CellColor::Rgb(0, 0, 0xff));
        assert_eq!(cell.fg, CellColor::Rgb(0xff, 0xff, 0xff));
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_text_is_clipped() {
        let mut buf = buffer(4, 1);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        surface.fill_text("abcdef", 8.0, 0.0, TextAlign::Left, Color::BLACK);
        surface.fill_text("zz", 0.0, 100.0, TextAlign::Left, Color::BLACK);
        assert_eq!(buffer_rows(&buf)[0], "  ab");
    }

    #[test]
    fn test_vertical_stroke_reverses_one_cell_per_row() {
        let mut buf = buffer(80, 10);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        // A cursor spanning one text line at y = 30.
        surface.stroke_line(Point::new(12.0, 30.0), Point::new(12.0, 44.0), Color::BLACK);

        assert!(buf[(3, 2)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(3, 1)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(3, 3)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_stroke_shows_its_colour() {
        let mut buf = buffer(80, 10);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        surface.fill_text("ab", 0.0, 30.0, TextAlign::Left, Color::BLACK);
        surface.stroke_line(
            Point::new(8.0, 30.0),
            Point::new(8.0, 44.0),
            Color::rgb(0xcc, 0x33, 0x00),
        );

        let cell = &buf[(2, 2)];
        assert_eq!(cell.fg, CellColor::Rgb(0xcc, 0x33, 0x00));
        assert!(cell.modifier.contains(Modifier::REVERSED));
        // Neighbouring text keeps its own colour.
        assert_eq!(buf[(1, 2)].fg, CellColor::Rgb(0, 0, 0));
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut buf = buffer(4, 2);
        let area = buf.area;
        let mut surface = TerminalSurface::new(&mut buf, area);
        surface.fill_rect(Rect::new(0.0, 0.0, 16.0, 30.0), Color::BLUE);
        surface.fill_text("ab", 0.0, 0.0, TextAlign::Left, Color::BLACK);
        surface.clear();
        assert_eq!(buf, buffer(4, 2));
    }
}
