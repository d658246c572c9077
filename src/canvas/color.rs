//! Colours and the UI palette.

use log::warn;

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // "#abc" expands to "#aabbcc"
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 0x11);
                Some(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        }
    }
}

/// Every colour the two screens paint with.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub title_bar: Color,
    pub font: Color,
    pub sent_bubble: Color,
    pub received_bubble: Color,
    pub input_box: Color,
    pub input_bubble: Color,
    pub cursor: Color,
    pub list_item: Color,
    pub list_item_font: Color,
    pub selected_item: Color,
    pub selected_item_font: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            title_bar: Color::rgb(0xdd, 0xdd, 0xdd),
            font: Color::BLACK,
            sent_bubble: Color::rgb(0xaa, 0xaa, 0xaa),
            received_bubble: Color::rgb(0xcc, 0xcc, 0xcc),
            input_box: Color::rgb(0xbb, 0xbb, 0xbb),
            input_bubble: Color::WHITE,
            cursor: Color::BLACK,
            list_item: Color::WHITE,
            list_item_font: Color::BLACK,
            selected_item: Color::BLUE,
            selected_item_font: Color::WHITE,
        }
    }
}

impl Palette {
    /// Replace `slot` with the parsed `hex` value, keeping the current colour
    /// (and logging) when the string is not a valid colour.
    pub fn override_with(slot: &mut Color, name: &str, hex: Option<&str>) {
        let Some(hex) = hex else {
            return;
        };
        match Color::from_hex(hex) {
            Some(color) => *slot = color,
            None => warn!("Ignoring invalid colour for {}: {:?}", name, hex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_form() {
        assert_eq!(Color::from_hex("#aabbcc"), Some(Color::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Color::from_hex("102030"), Some(Color::rgb(0x10, 0x20, 0x30)));
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(Color::from_hex("#ddd"), Some(Color::rgb(0xdd, 0xdd, 0xdd)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_override_keeps_colour_on_invalid_input() {
        let mut palette = Palette::default();
        Palette::override_with(&mut palette.title_bar, "title_bar", Some("nope"));
        assert_eq!(palette.title_bar, Color::rgb(0xdd, 0xdd, 0xdd));

        Palette::override_with(&mut palette.title_bar, "title_bar", Some("#123456"));
        assert_eq!(palette.title_bar, Color::rgb(0x12, 0x34, 0x56));
    }
}
