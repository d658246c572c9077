use ratatui::Frame;
use ratatui::layout::Rect;

/// A screen that renders itself into a frame.
///
/// Components receive their data as props (borrowed struct fields) and
/// repaint the whole `area` every frame. Editing and selection state lives in
/// `core`, so components never handle events themselves.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
