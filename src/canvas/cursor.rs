//! Mapping a flat cursor offset onto wrapped lines.

use super::surface::Point;

/// Position of the cursor in the wrapped-line grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

/// Walk `cursor` character positions across `lines`.
///
/// A line with `n` characters offers `n + 1` positions; stepping past the
/// last one moves to column 0 of the next row. That extra step stands for
/// the space the wrapper removed at the line break, so for single-spaced text
/// without leading whitespace the result matches the raw offset exactly. Runs
/// of whitespace that the wrapper collapsed are not accounted for and shift the
/// cursor left by the number of dropped characters. Dropped leading whitespace
/// shifts it right instead.
///
/// On the last row the column keeps advancing past the end of the line, which
/// covers trailing whitespace the wrapper dropped.
pub fn locate(lines: &[String], cursor: usize) -> GridPos {
    let mut pos = GridPos::default();
    let last_row = lines.len().saturating_sub(1);

    for _ in 0..cursor {
        let capacity = lines.get(pos.row).map_or(0, |l| l.chars().count());
        if capacity > pos.col || pos.row >= last_row {
            pos.col += 1;
        } else {
            pos.row += 1;
            pos.col = 0;
        }
    }

    pos
}

/// Pixel offset of `pos` relative to the top-left of the first line.
///
/// `x` is the measured width of the row's first `col` characters; columns
/// past the end of the row are measured as trailing spaces.
pub fn pixel_offset<F>(lines: &[String], pos: GridPos, line_spacing: f32, measure: F) -> Point
where
    F: Fn(&str) -> f32,
{
    let line = lines.get(pos.row).map(String::as_str).unwrap_or_default();
    let mut prefix: String = line.chars().take(pos.col).collect();
    let overflow = pos.col.saturating_sub(line.chars().count());
    prefix.extend(std::iter::repeat_n(' ', overflow));

    Point::new(measure(&prefix), pos.row as f32 * line_spacing)
}
