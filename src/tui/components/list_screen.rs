use ratatui::Frame;
use ratatui::layout::Rect;

use crate::canvas::{ListView, Palette, draw_list};
use crate::core::chat_list::{ChatList, LIST_TITLE};
use crate::tui::component::Component;
use crate::tui::surface::TerminalSurface;

/// Chat picker: the title bar plus one row per chat id.
pub struct ListScreen<'a> {
    pub list: &'a ChatList,
    pub palette: &'a Palette,
}

impl Component for ListScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let view = ListView {
            title: LIST_TITLE,
            items: &self.list.chat_ids,
            selected: self.list.selected,
            error: self.list.error.as_deref(),
            palette: self.palette,
        };
        let mut surface = TerminalSurface::new(frame.buffer_mut(), area);
        draw_list(&mut surface, &view);
    }
}
