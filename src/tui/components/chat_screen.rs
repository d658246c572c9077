//! # ChatScreen Component
//!
//! Props-in-struct wrapper that paints one chat through the canvas renderer.
//! It holds no state of its own; every frame is rebuilt from the borrowed
//! [`ChatRoom`].

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::canvas::{ChatView, Palette, draw_chat};
use crate::core::state::ChatRoom;
use crate::tui::component::Component;
use crate::tui::surface::TerminalSurface;

pub struct ChatScreen<'a> {
    pub room: &'a ChatRoom,
    pub user_id: &'a str,
    pub blink: bool,
    pub palette: &'a Palette,
}

impl Component for ChatScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let view = ChatView {
            title: &self.room.title,
            messages: &self.room.messages,
            user_id: self.user_id,
            input_text: self.room.editor.text(),
            cursor: self.room.editor.cursor(),
            blink: self.blink,
            error: self.room.error.as_deref(),
            palette: self.palette,
        };
        let mut surface = TerminalSurface::new(frame.buffer_mut(), area);
        draw_chat(&mut surface, &view);
    }
}
