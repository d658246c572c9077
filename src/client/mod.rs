//! # Chat Server Client
//!
//! [`ChatSource`] is the seam between the app and the server;
//! [`HttpChatSource`] is the real implementation.

pub mod http;
pub mod source;

pub use http::HttpChatSource;
pub use source::{ChatSource, ClientError};
