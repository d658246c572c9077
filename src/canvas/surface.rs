//! The drawing-surface seam.
//!
//! Everything in `canvas` paints through [`Surface`]. The terminal adapter
//! implements it over a ratatui buffer; tests implement it with a recorder.
//! Coordinates are logical pixels with the origin at the top-left corner and
//! text anchored at its top edge.

use super::color::Color;

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Font selection. Only the pixel size and weight vary across the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub bold: bool,
}

impl Font {
    pub fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Horizontal anchor for `fill_text`: the x coordinate is the left edge
/// (`Left`) or the right edge (`Right`) of the painted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// A 2D drawing target with text measurement.
///
/// Modeled on an immediate-mode canvas: the current font is state, every
/// other call paints directly. Implementations must clip anything outside
/// `size()`.
pub trait Surface {
    /// Canvas dimensions in pixels.
    fn size(&self) -> Size;

    /// Select the font used by subsequent `measure_text` and `fill_text` calls.
    fn set_font(&mut self, font: Font);

    /// Width in pixels of `text` in the current font.
    fn measure_text(&self, text: &str) -> f32;

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, color: Color);
}
