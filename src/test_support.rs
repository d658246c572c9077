//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::canvas::{Color, Font, Point, Rect, Size, Surface, TextAlign};
use crate::core::message::Message;

/// One painting operation captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        align: TextAlign,
        color: Color,
        font: Font,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
    },
}

/// Flattened `FillText` fields for convenient assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCall {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub color: Color,
    pub font: Font,
}

/// A surface that records draw calls instead of painting.
///
/// Text is measured as monospace: each character is half the font size wide
/// (7px at the 14px reference font).
pub struct RecordingSurface {
    size: Size,
    font: Font,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            font: Font::regular(14.0),
            calls: Vec::new(),
        }
    }

    pub fn filled_rects(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn rounded_rects(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRoundedRect { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::StrokeLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// The first `fill_text` call that painted exactly `text`.
    pub fn text_call(&self, text: &str) -> Option<TextCall> {
        self.calls.iter().find_map(|c| match c {
            DrawCall::FillText {
                text: t,
                x,
                y,
                align,
                color,
                font,
            } if t == text => Some(TextCall {
                text: t.clone(),
                x: *x,
                y: *y,
                align: *align,
                color: *color,
                font: *font,
            }),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font.size * 0.5
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.calls
            .push(DrawCall::FillRoundedRect { rect, radius, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Color) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            x,
            y,
            align,
            color,
            font: self.font,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        self.calls.push(DrawCall::StrokeLine { from, to, color });
    }
}

/// Shorthand for a received or sent message with an empty timestamp.
pub fn message(from: &str, text: &str) -> Message {
    Message {
        from: from.to_string(),
        text: text.to_string(),
        sent_at: String::new(),
    }
}

/// Each buffer row as a string of cell symbols.
pub fn buffer_rows(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}
