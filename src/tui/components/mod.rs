//! # TUI Components
//!
//! One component per screen. Both are thin props-in-struct wrappers: they
//! borrow core state, build a canvas view and paint it through a
//! [`TerminalSurface`](crate::tui::surface::TerminalSurface).
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── chat_screen.rs   (title bar, bubbles, input box)
//! └── list_screen.rs   (chat picker)
//! ```

pub mod chat_screen;
pub mod list_screen;

pub use chat_screen::ChatScreen;
pub use list_screen::ListScreen;
