//! List screen renderer: a title bar over one full-width row per chat id.

use super::chat_view::{paint_error, paint_title_bar};
use super::color::Palette;
use super::metrics::LayoutMetrics;
use super::surface::{Font, Rect, Surface, TextAlign};

pub struct ListView<'a> {
    pub title: &'a str,
    pub items: &'a [String],
    pub selected: usize,
    pub error: Option<&'a str>,
    pub palette: &'a Palette,
}

/// Height of one list row.
pub fn row_height(m: &LayoutMetrics) -> f32 {
    m.line_spacing * 2.0
}

/// Index of the first row drawn, scrolled just far enough that the selected
/// row fits entirely on screen. `fits` is how many rows the canvas holds.
fn first_visible(selected: usize, fits: f32) -> usize {
    let whole = (fits.floor() as usize).max(1);
    selected.saturating_sub(whole - 1)
}

pub fn draw_list(surface: &mut impl Surface, view: &ListView<'_>) {
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

    paint_title_bar(surface, &m, view.title, palette);

    surface.set_font(Font::regular(m.font_height));
    let row = row_height(&m);
    let first = first_visible(view.selected, (size.height - m.title_bar_height) / row);
    for (slot, (i, item)) in view.items.iter().enumerate().skip(first).enumerate() {
        let top = m.title_bar_height + slot as f32 * row;
        if top >= size.height {
            break;
        }
        let (fill, font) = if i == view.selected {
            (palette.selected_item, palette.selected_item_font)
        } else {
            (palette.list_item, palette.list_item_font)
        };
        surface.fill_rect(Rect::new(0.0, top, size.width, row), fill);
        surface.fill_text(item, m.margin * 2.0, top + m.margin * 2.0, TextAlign::Left, font);
    }
}
