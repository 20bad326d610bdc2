//! Collaborator interfaces the game loop drives.
//!
//! The terminal renderer, keyboard input and score table live in other crates;
//! the loop only sees these traits. Renderer and score failures are logged and
//! play continues. Input failures end the loop.

use std::time::Duration;

use anyhow::Result;

use crate::game_loop::GameSummary;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Level};

/// A resolved input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Repaint everything (form feed key, terminal resize).
    Redraw,
    /// Ctrl-C in raw mode, or a termination signal.
    Interrupt,
    /// A key that is not bound to anything.
    Other,
}

pub trait InputSource {
    /// Wait up to `timeout` for an event; `None` means the timeout elapsed.
    fn poll(&mut self, timeout: Duration) -> Result<Option<Input>>;

    /// Block until any event arrives (used while paused).
    fn wait_for_resume(&mut self) -> Result<Input>;

    /// Sleep for `duration`, dropping any keys typed meanwhile.
    fn discard_for(&mut self, duration: Duration) -> Result<()>;
}

pub trait Renderer {
    /// Take over the display.
    fn enter(&mut self) -> Result<()>;

    /// Give the display back. Called on every exit path.
    fn exit(&mut self) -> Result<()>;

    fn clear_screen(&mut self) -> Result<()>;

    /// Repaint whatever changed since the last frame.
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    fn show_message(&mut self, text: &str, visible: bool) -> Result<()>;
}

pub trait ScoreSink {
    fn record_score(&mut self, summary: &GameSummary) -> Result<()>;

    /// Show the table for one level, or for all levels.
    fn show_scores(&mut self, level: Option<Level>) -> Result<()>;
}
