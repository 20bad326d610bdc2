//! Game configuration, resolved once before the loop starts.

use std::time::Duration;

use crate::rng::ShuffleMode;
use crate::types::{Level, CLEAR_PAUSE_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub level: Level,
    /// Expose the next piece to the renderer.
    pub preview: bool,
    /// Help line naming the bound keys, shown while playing.
    pub key_help: String,
    pub seed: u32,
    pub shuffle: ShuffleMode,
    /// Pause after each stage of a row clear.
    pub clear_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            preview: false,
            key_help: String::new(),
            seed: 1,
            shuffle: ShuffleMode::default(),
            clear_pause: Duration::from_millis(CLEAR_PAUSE_MS),
        }
    }
}
