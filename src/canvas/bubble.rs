//! Chat bubble sizing and bottom-up stacking.

use super::metrics::LayoutMetrics;
use super::surface::Rect;

/// Who a bubble belongs to, which decides its anchor side and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Written by the local user: right-anchored.
    Sent,
    /// Written by someone else: left-anchored.
    Received,
}

/// Laid-out bubble for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub rect: Rect,
    pub origin: Origin,
}

/// Width and height of a bubble wrapping `lines`.
///
/// Lines are measured trimmed, matching how they are painted.
pub fn bubble_size<F>(lines: &[String], padding: f32, line_spacing: f32, measure: F) -> (f32, f32)
where
    F: Fn(&str) -> f32,
{
    let widest = lines
        .iter()
        .map(|line| measure(line.trim()))
        .fold(0.0_f32, f32::max);
    let width = widest + padding * 2.0;
    (width, bubble_height(lines.len(), padding, line_spacing))
}

pub fn bubble_height(line_count: usize, padding: f32, line_spacing: f32) -> f32 {
    padding * 2.0 + line_count as f32 * line_spacing
}

/// Running vertical cursor for stacking bubbles upward from the input box.
///
/// Each call to [`BubbleStack::place`] moves the cursor up by one line gap
/// plus the bubble's line count, and returns `None` once a bubble would be
/// fully hidden behind the title bar. After that the stack is exhausted and
/// older messages are not laid out.
pub struct BubbleStack {
    metrics: LayoutMetrics,
    cursor_y: f32,
    exhausted: bool,
}

impl BubbleStack {
    /// Start stacking with bubbles ending above `bottom` (the input box top).
    pub fn new(metrics: LayoutMetrics, bottom: f32) -> Self {
        Self {
            metrics,
            cursor_y: bottom,
            exhausted: false,
        }
    }

    pub fn place(&mut self, line_count: usize, width: f32, origin: Origin) -> Option<Bubble> {
        if self.exhausted {
            return None;
        }

        let m = &self.metrics;
        self.cursor_y -= m.line_spacing;
        self.cursor_y -= line_count as f32 * m.line_spacing;
        let height = bubble_height(line_count, m.padding, m.line_spacing);

        if self.cursor_y + height < m.title_bar_height {
            self.exhausted = true;
            return None;
        }

        let x = match origin {
            Origin::Sent => m.width - m.margin - width,
            Origin::Received => m.margin,
        };

        Some(Bubble {
            rect: Rect::new(x, self.cursor_y, width, height),
            origin,
        })
    }
}
