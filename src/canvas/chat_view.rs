//! # Chat Screen Renderer
//!
//! Paints a full chat frame: input box at the bottom, message bubbles stacked
//! upward from it, and a fixed title bar on top.
//!
//! ## Paint Order
//!
//! ```text
//! 1. clear + background
//! 2. error text (exclusive, stops here)
//! 3. input box strip        ┐
//! 4. rounded input bubble   │ bottom, grows upward with wrapped input
//! 5. input lines            │
//! 6. cursor stroke (blink)  ┘
//! 7. message bubbles, newest first, until hidden behind the title bar
//! 8. title bar, painted over anything that scrolled beneath it
//! ```
//!
//! Every call repaints the whole surface. Nothing is cached between frames.

use crate::core::message::Message;

use super::bubble::{BubbleStack, Origin, bubble_size};
use super::color::Palette;
use super::cursor::{locate, pixel_offset};
use super::metrics::LayoutMetrics;
use super::surface::{Font, Point, Rect, Surface, TextAlign};
use super::wrap::wrap;

/// Everything a chat frame depends on, borrowed from application state.
pub struct ChatView<'a> {
    pub title: &'a str,
    pub messages: &'a [Message],
    /// Messages from this sender are drawn as sent bubbles.
    pub user_id: &'a str,
    pub input_text: &'a str,
    /// Character offset into `input_text`.
    pub cursor: usize,
    pub blink: bool,
    pub error: Option<&'a str>,
    pub palette: &'a Palette,
}

/// A message with its text broken into lines for the current width.
struct WrappedMessage<'a> {
    from: &'a str,
    lines: Vec<String>,
}

/// Paint a chat frame onto `surface`.
pub fn draw_chat(surface: &mut impl Surface, view: &ChatView<'_>) {
    let size = surface.size();
    let m = LayoutMetrics::for_width(size.width);
    let palette = view.palette;

    surface.set_font(Font::regular(m.font_height));
    surface.clear();
    surface.fill_rect(Rect::new(0.0, 0.0, size.width, size.height), palette.background);

    if let Some(error) = view.error {
        paint_error(surface, error, palette);
        return;
    }

    // Input box
    let input_lines = wrap(view.input_text, m.max_input_text_width(), |s| {
        surface.measure_text(s)
    });
    let input_box_height = m.line_spacing * (input_lines.len() as f32 + 1.0);
    let input_box = Rect::new(0.0, size.height - input_box_height, size.width, input_box_height);
    surface.fill_rect(input_box, palette.input_box);

    let input_bubble = Rect::new(
        input_box.x + m.margin,
        input_box.y + m.margin,
        input_box.width - m.margin * 2.0,
        input_box.height - m.margin * 2.0,
    );
    surface.fill_rounded_rect(input_bubble, m.padding, palette.input_bubble);

    let text_x = input_bubble.x + m.padding;
    let text_y = input_bubble.y + m.padding;
    for (i, line) in input_lines.iter().enumerate() {
        let y = text_y + i as f32 * m.line_spacing;
        surface.fill_text(line.trim(), text_x, y, TextAlign::Left, palette.font);
    }

    if view.blink {
        let pos = locate(&input_lines, view.cursor);
        let offset = pixel_offset(&input_lines, pos, m.line_spacing, |s| surface.measure_text(s));
        let top = Point::new(text_x + offset.x, text_y + offset.y);
        let bottom = Point::new(top.x, top.y + m.font_height);
        surface.stroke_line(top, bottom, palette.cursor);
    }

    // Message bubbles, newest at the bottom
    let chat: Vec<WrappedMessage<'_>> = view
        .messages
        .iter()
        .map(|msg| WrappedMessage {
            from: &msg.from,
            lines: wrap(&msg.text, m.max_message_text_width(), |s| surface.measure_text(s)),
        })
        .collect();

    let mut stack = BubbleStack::new(m, input_box.y);
    for msg in chat.iter().rev() {
        let origin = if msg.from == view.user_id {
            Origin::Sent
        } else {
            Origin::Received
        };
        let (width, _) = bubble_size(&msg.lines, m.padding, m.line_spacing, |s| {
            surface.measure_text(s)
        });
        let Some(bubble) = stack.place(msg.lines.len(), width, origin) else {
            break;
        };

        let (fill, text_x, align) = match origin {
            Origin::Sent => (
                palette.sent_bubble,
                size.width - m.margin - m.padding,
                TextAlign::Right,
            ),
            Origin::Received => (palette.received_bubble, bubble.rect.x + m.padding, TextAlign::Left),
        };
        surface.fill_rounded_rect(bubble.rect, m.margin, fill);
        for (i, line) in msg.lines.iter().enumerate() {
            let y = bubble.rect.y + m.padding + i as f32 * m.line_spacing;
            surface.fill_text(line.trim(), text_x, y, align, palette.font);
        }
    }

    paint_title_bar(surface, &m, view.title, palette);
}

/// Exclusive error display shared by both screens.
pub(super) fn paint_error(surface: &mut impl Surface, error: &str, palette: &Palette) {
    surface.fill_text(&format!("ERROR: {error}"), 0.0, 0.0, TextAlign::Left, palette.font);
}

pub(super) fn paint_title_bar(
    surface: &mut impl Surface,
    m: &LayoutMetrics,
    title: &str,
    palette: &Palette,
) {
    surface.fill_rect(Rect::new(0.0, 0.0, m.width, m.title_bar_height), palette.title_bar);
    surface.set_font(Font::bold(m.title_font_height));
    surface.fill_text(title, m.margin * 2.0, m.margin * 2.0, TextAlign::Left, palette.font);
}
