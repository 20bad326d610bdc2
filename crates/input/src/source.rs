//! Keyboard-backed input source.
//!
//! Reads `crossterm` events from the controlling terminal. Key releases, mouse
//! and focus events are skipped without ending the wait; a resize is reported
//! as a redraw request.
//!
//! A termination signal cannot arrive as a key event, so the signal handler sets
//! a shared flag instead. Every wait below checks it between short polls and
//! reports it as [`Input::Interrupt`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::{Input, InputSource};
use crate::keymap::KeyMap;

/// Longest single terminal poll, so a raised interrupt flag is seen promptly.
const SIGNAL_CHECK: Duration = Duration::from_millis(50);

pub struct TerminalInput {
    keymap: KeyMap,
    interrupted: Arc<AtomicBool>,
}

impl TerminalInput {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Flag for a signal handler to raise; the next wait returns an interrupt.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }

    /// Turn a raw terminal event into game input, if it is one.
    pub fn translate(&self, event: Event) -> Option<Input> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(self.keymap.resolve(key)),
            Event::Resize(..) => Some(Input::Redraw),
            _ => None,
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Input>> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_interrupted() {
                return Ok(Some(Input::Interrupt));
            }
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left.min(SIGNAL_CHECK))? {
                if left <= SIGNAL_CHECK {
                    return Ok(None);
                }
                continue;
            }
            if let Some(input) = self.translate(event::read()?) {
                return Ok(Some(input));
            }
        }
    }

    fn wait_for_resume(&mut self) -> Result<Input> {
        loop {
            if self.is_interrupted() {
                return Ok(Input::Interrupt);
            }
            if !event::poll(SIGNAL_CHECK)? {
                continue;
            }
            if let Some(input) = self.translate(event::read()?) {
                return Ok(input);
            }
        }
    }

    // Everything typed during the pause is dropped, Ctrl-C included. A signal
    // cuts the pause short and stays raised for the next poll.
    fn discard_for(&mut self, duration: Duration) -> Result<()> {
        let deadline = Instant::now() + duration;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() || self.is_interrupted() {
                return Ok(());
            }
            if event::poll(left.min(SIGNAL_CHECK))? {
                event::read()?;
            }
        }
    }
}
