//! # Core Application Logic
//!
//! This module contains the chat client's business logic.
//! It knows nothing about any specific UI technology or transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  canvas    │      │   client   │
//!     │  Adapter   │      │  (layout,  │      │   (HTTP    │
//!     │ (ratatui)  │      │  drawing)  │      │   source)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`editor`]: Input text + cursor editing
//! - [`chat_list`]: Chat picker selection
//! - [`message`]: Wire types shared with the server
//! - [`config`]: Layered configuration

pub mod action;
pub mod chat_list;
pub mod config;
pub mod editor;
pub mod key;
pub mod message;
pub mod state;

pub use action::{Action, Effect, update};
pub use state::{App, ChatRoom, Screen};
