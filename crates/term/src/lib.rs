//! Terminal "game renderer" module.
//!
//! Renders game snapshots into a simple framebuffer and flushes only the cells
//! that changed. [`TerminalScreen`] ties the two together as the game loop's
//! [`Renderer`](crate::core::Renderer).
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the board the classic way: reverse-video blocks, two columns per cell

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tetris_bsd_core as core;
pub use tetris_bsd_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport, MIN_HEIGHT, MIN_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{ScreenState, TerminalScreen};
