//! UI-agnostic keyboard input.
//!
//! Adapters translate their native key events into [`KeyInput`]; core logic
//! never sees terminal or browser types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Enter,
    /// A single printable character.
    Char(char),
    /// Anything else (function keys, Home/End, ...). Always a no-op.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    /// Control or command was held.
    pub modified: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modified: false,
        }
    }

    pub fn modified(key: Key) -> Self {
        Self {
            key,
            modified: true,
        }
    }
}
