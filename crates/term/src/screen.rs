//! The game loop's [`Renderer`] backed by a real terminal.

use anyhow::{bail, Result};
use crossterm::terminal;
use tracing::debug;

use crate::core::{GameSnapshot, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport, MIN_HEIGHT, MIN_WIDTH};
use crate::renderer::TerminalRenderer;

pub struct TerminalScreen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    frame: ScreenState,
}

/// What is currently meant to be on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub snapshot: Option<GameSnapshot>,
    pub message: Option<String>,
}

impl ScreenState {
    pub fn show_message(&mut self, text: &str, visible: bool) {
        if visible {
            self.message = Some(text.to_string());
        } else if self.message.as_deref() == Some(text) {
            self.message = None;
        }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            term: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(MIN_WIDTH, MIN_HEIGHT),
            frame: ScreenState::default(),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.frame
    }

    fn viewport() -> Viewport {
        match terminal::size() {
            Ok((w, h)) => Viewport::new(w, h),
            Err(_) => Viewport::new(MIN_WIDTH, MIN_HEIGHT),
        }
    }

    fn repaint(&mut self) -> Result<()> {
        self.view.render_into(
            self.frame.snapshot.as_ref(),
            self.frame.message.as_deref(),
            Self::viewport(),
            &mut self.fb,
        );
        self.term.draw_swap(&mut self.fb)
    }
}

impl Renderer for TerminalScreen {
    fn enter(&mut self) -> Result<()> {
        let (w, h) = terminal::size()?;
        if !Viewport::new(w, h).is_large_enough() {
            bail!("need at least a {MIN_WIDTH}x{MIN_HEIGHT} terminal (this one is {w}x{h})");
        }
        debug!(width = w, height = h, "entering terminal");
        self.term.enter()
    }

    fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.term.clear()
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.frame.snapshot = Some(*snapshot);
        self.repaint()
    }

    fn show_message(&mut self, text: &str, visible: bool) -> Result<()> {
        self.frame.show_message(text, visible);
        self.repaint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_only_removes_matching_message() {
        let mut state = ScreenState::default();
        state.show_message("keys", true);
        state.show_message("paused", false);
        assert_eq!(state.message.as_deref(), Some("keys"));
        state.show_message("keys", false);
        assert_eq!(state.message, None);
    }

    #[test]
    fn newer_message_replaces_older() {
        let mut state = ScreenState::default();
        state.show_message("keys", true);
        state.show_message("paused", true);
        assert_eq!(state.message.as_deref(), Some("paused"));
    }
}
