//! Proportional layout metrics.
//!
//! The design is drawn against a 320-unit wide reference canvas. Every spacing
//! value is a fixed multiple of `canvas_width / 320`, so proportions are the
//! same at any resolution.

/// Width of the reference design.
pub const BASE_WIDTH: f32 = 320.0;

const BASE_FONT_HEIGHT: f32 = 14.0;
const BASE_MARGIN: f32 = 4.0;
const BASE_PADDING: f32 = 4.0;

/// Derived per-draw spacing values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub width: f32,
    pub font_height: f32,
    pub margin: f32,
    pub padding: f32,
    /// Title text is one padded line tall.
    pub title_font_height: f32,
    pub title_bar_height: f32,
    /// Vertical advance between two wrapped lines.
    pub line_spacing: f32,
}

impl LayoutMetrics {
    pub fn for_width(width: f32) -> Self {
        let scale = width / BASE_WIDTH;
        let font_height = BASE_FONT_HEIGHT * scale;
        let margin = BASE_MARGIN * scale;
        let padding = BASE_PADDING * scale;
        let title_font_height = padding + font_height + padding;
        let title_bar_height = margin * 2.0 + title_font_height + margin * 2.0;
        let line_spacing = (margin + padding + font_height + padding + margin) / 2.0;

        Self {
            width,
            font_height,
            margin,
            padding,
            title_font_height,
            title_bar_height,
            line_spacing,
        }
    }

    /// Text width available inside a message bubble. Leaves room for the
    /// outer margins plus an extra margin so sent and received bubbles never
    /// span the full row.
    pub fn max_message_text_width(&self) -> f32 {
        self.width - self.margin * 3.0 - self.padding * 2.0
    }

    /// Text width available inside the input bubble.
    pub fn max_input_text_width(&self) -> f32 {
        self.width - self.margin * 2.0 - self.padding * 2.0
    }
}
