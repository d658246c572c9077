//! Greedy word wrapping against a pixel-width measure.
//!
//! Unlike the column-based wrapping a terminal widget does, the caller
//! supplies the measurement, so the same code wraps for any font or surface.

/// Split `text` into lines whose measured width fits `max_width`.
///
/// Words are separated by whitespace runs and rejoined with single spaces.
/// The first word always stays on the first line even if it is wider than
/// `max_width`, and so does any single word that starts a new line: words are
/// never broken. Always returns at least one line.
pub fn wrap<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut words = text.split_whitespace();
    let mut lines = vec![words.next().unwrap_or_default().to_string()];

    for word in words {
        // lines is never empty here
        let current = lines.len() - 1;
        let tentative = format!("{} {}", lines[current], word);
        if measure(&tentative) > max_width {
            lines.push(word.to_string());
        } else {
            lines[current] = tentative;
        }
    }

    lines
}
