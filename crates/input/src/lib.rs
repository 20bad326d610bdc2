//! Terminal input module.
//!
//! Maps `crossterm` key events onto the seven game commands through a
//! configurable key string, and provides [`TerminalInput`], the keyboard-backed
//! [`InputSource`](crate::core::InputSource) the game loop polls.

pub mod keymap;
pub mod source;

pub use tetris_bsd_core as core;
pub use tetris_bsd_types as types;

pub use keymap::KeyMap;
pub use source::TerminalInput;
