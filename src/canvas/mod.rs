//! # Canvas Layout and Rendering
//!
//! The drawing engine for both screens. It knows nothing about terminals or
//! networks: it receives a [`Surface`] to measure and paint on plus borrowed
//! view data, and repaints the whole frame on every call.
//!
//! ```text
//! messages ──► wrap ──► bubble ──┐
//!                                ├──► chat_view ──► Surface
//! input ─────► wrap ──► cursor ──┘
//! ```
//!
//! ## Modules
//!
//! - [`surface`]: the `Surface` trait and geometry types
//! - [`metrics`]: proportional spacing derived from canvas width
//! - [`wrap`]: greedy pixel-width word wrap
//! - [`cursor`]: flat offset → wrapped row/column → pixels
//! - [`bubble`]: bubble sizing and upward stacking
//! - [`chat_view`] / [`list_view`]: full-frame renderers

pub mod bubble;
pub mod chat_view;
pub mod color;
pub mod cursor;
pub mod list_view;
pub mod metrics;
pub mod surface;
pub mod wrap;

pub use chat_view::{ChatView, draw_chat};
pub use color::{Color, Palette};
pub use list_view::{ListView, draw_list};
pub use surface::{Font, Point, Rect, Size, Surface, TextAlign};
