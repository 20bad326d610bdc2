//! Key mapping from terminal events to game inputs.
//!
//! Commands are bound by a key string of exactly seven distinct characters, in
//! the order left, rotate, right, down, drop, pause, quit. Two keys are fixed:
//! Ctrl-C interrupts the game and Ctrl-L (form feed) redraws the screen.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Input;
use crate::types::{Command, ConfigError, DEFAULT_KEYS};

const COMMAND_COUNT: usize = Command::ALL.len();
const FORM_FEED: char = '\x0c';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    keys: [char; COMMAND_COUNT],
}

impl KeyMap {
    /// Parse a key string such as `"15320pq"`.
    pub fn parse(keys: &str) -> Result<Self, ConfigError> {
        let count = keys.chars().count();
        if count != COMMAND_COUNT {
            return Err(ConfigError::KeyCount(count));
        }
        let bound: ArrayVec<char, COMMAND_COUNT> = keys.chars().collect();
        for (i, key) in bound.iter().enumerate() {
            if bound[i + 1..].contains(key) {
                return Err(ConfigError::DuplicateKey(*key));
            }
        }
        let keys = bound.into_inner().map_err(|_| ConfigError::KeyCount(count))?;
        Ok(Self { keys })
    }

    pub fn key_for(&self, command: Command) -> char {
        let slot = Command::ALL
            .iter()
            .position(|c| *c == command)
            .unwrap_or_default();
        self.keys[slot]
    }

    pub fn command_for(&self, key: char) -> Option<Command> {
        self.keys
            .iter()
            .position(|k| *k == key)
            .map(|slot| Command::ALL[slot])
    }

    /// Help line naming every binding, e.g. `1 - left   5 - rotate   ...`.
    pub fn help_text(&self) -> String {
        Command::ALL
            .iter()
            .zip(self.keys)
            .map(|(command, key)| format!("{} - {}", key_name(key), command.label()))
            .collect::<Vec<_>>()
            .join("   ")
    }

    /// Resolve one key press.
    pub fn resolve(&self, key: KeyEvent) -> Input {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => return Input::Interrupt,
                KeyCode::Char('l') | KeyCode::Char('L') => return Input::Redraw,
                _ => {}
            }
        }

        let ch = match key.code {
            KeyCode::Char(FORM_FEED) => return Input::Redraw,
            KeyCode::Char(ch) => ch,
            KeyCode::Enter => '\n',
            KeyCode::Tab => '\t',
            KeyCode::Esc => '\x1b',
            _ => return Input::Other,
        };
        self.command_for(ch).map_or(Input::Other, Input::Command)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut keys = [' '; COMMAND_COUNT];
        for (slot, key) in keys.iter_mut().zip(DEFAULT_KEYS.chars()) {
            *slot = key;
        }
        Self { keys }
    }
}

fn key_name(key: char) -> String {
    match key {
        ' ' => "<space>".to_string(),
        '\n' => "<return>".to_string(),
        '\t' => "<tab>".to_string(),
        other => other.to_string(),
    }
}
