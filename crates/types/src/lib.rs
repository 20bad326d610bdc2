//! Core types module - shared data structures and constants
//!
//! Everything here is plain data: board geometry, piece kinds, the command set
//! and the difficulty level. It is shared by the core engine, the input mapping
//! and the terminal renderer.
//!
//! # Board Geometry
//!
//! The board is a flat buffer of `B_ROWS * B_COLS` cells addressed as
//! `row * B_COLS + col`. It carries sentinel cells so collision checks never need
//! bounds arithmetic:
//!
//! | Rows / columns | Meaning |
//! |----------------|---------|
//! | row 0 | hidden top row, shapes anchored on row 1 may poke into it |
//! | rows `A_FIRST..A_LAST` (1..21) | active rows, where pieces fall and rows clear |
//! | row 21 | bottom visible row, permanently occupied floor |
//! | row 22 | hidden row beneath the floor, permanently occupied |
//! | column 0, column `B_COLS - 1` | side walls, permanently occupied |
//!
//! The playable interior is `B_COLS - 2` = 10 cells wide.
//!
//! # Timing
//!
//! The fall interval is `BASE_FALL_US / level` microseconds, so level 1 falls once a
//! second and level 9 roughly nine times a second.
//!
//! # Examples
//!
//! ```
//! use tetris_bsd_types::{Command, Level, B_COLS, INTERIOR_WIDTH, SPAWN_ANCHOR};
//!
//! assert_eq!(INTERIOR_WIDTH, B_COLS - 2);
//! assert_eq!(SPAWN_ANCHOR, B_COLS + B_COLS / 2 - 1);
//!
//! let level = Level::new(4).unwrap();
//! assert_eq!(level.fall_interval().as_micros(), 250_000);
//!
//! assert_eq!(Command::ALL[0], Command::Left);
//! assert_eq!(Command::Quit.label(), "quit");
//! ```

use std::time::Duration;

/// Board width in cells, side walls included.
pub const B_COLS: usize = 12;

/// Board height in cells, hidden rows included.
pub const B_ROWS: usize = 23;

/// Total number of cells in the board buffer.
pub const B_SIZE: usize = B_ROWS * B_COLS;

/// First active row (rows a piece can ever occupy once locked).
pub const A_FIRST: usize = 1;

/// One past the last active row; rows from here down are floor.
pub const A_LAST: usize = 21;

/// Number of active rows.
pub const ACTIVE_ROWS: usize = A_LAST - A_FIRST;

/// First displayed row.
pub const D_FIRST: usize = 1;

/// One past the last displayed row (the visible floor row is the last one shown).
pub const D_LAST: usize = 22;

/// Number of playable cells in one row.
pub const INTERIOR_WIDTH: usize = B_COLS - 2;

/// Anchor index every new piece spawns at: row `A_FIRST`, just left of center.
pub const SPAWN_ANCHOR: usize = A_FIRST * B_COLS + B_COLS / 2 - 1;

/// Lowest selectable level.
pub const MIN_LEVEL: u32 = 1;

/// Highest selectable level.
pub const MAX_LEVEL: u32 = 9;

/// Level used when none is given.
pub const DEFAULT_LEVEL: u32 = 2;

/// Fall interval numerator in microseconds.
pub const BASE_FALL_US: u64 = 1_000_000;

/// Feedback pause after each cleared row (milliseconds).
pub const CLEAR_PAUSE_MS: u64 = 100;

/// Default command keys: left, rotate, right, down, drop, pause, quit.
pub const DEFAULT_KEYS: &str = "15320pq";


/// The seven tetromino piece kinds, in randomizer index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Z,
    S,
    T,
    O,
    L,
    J,
    I,
}

impl PieceKind {
    /// All kinds; position in this array is the randomizer's shape index.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
    ];

    /// Kind for a randomizer index (0..7).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`; the randomizer only ever yields indices below 7.
    pub fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(kind) => *kind,
            None => panic!("shape index {index} outside the 7-piece catalog"),
        }
    }
}

/// The seven player commands, bound to keys by a key string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    Left,
    /// Rotate piece 90° (counter-clockwise)
    Rotate,
    /// Move piece one column right
    Right,
    /// Move piece one row down, no score
    SoftDrop,
    /// Drop piece to the bottom, one point per row
    HardDrop,
    /// Suspend the game until a key is pressed
    Pause,
    /// End the game
    Quit,
}

impl Command {
    /// Commands in key-string order.
    pub const ALL: [Command; 7] = [
        Command::Left,
        Command::Rotate,
        Command::Right,
        Command::SoftDrop,
        Command::HardDrop,
        Command::Pause,
        Command::Quit,
    ];

    /// Short label used in the key help line.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Rotate => "rotate",
            Command::Right => "right",
            Command::SoftDrop => "down",
            Command::HardDrop => "drop",
            Command::Pause => "pause",
            Command::Quit => "quit",
        }
    }
}

/// Difficulty level, always within `MIN_LEVEL..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    pub fn new(level: u32) -> Result<Self, ConfigError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(ConfigError::LevelOutOfRange {
                level,
                min: MIN_LEVEL,
                max: MAX_LEVEL,
            });
        }
        Ok(Self(level))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Time a piece waits before falling one row.
    pub fn fall_interval(self) -> Duration {
        Duration::from_micros(BASE_FALL_US / u64::from(self.0))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(DEFAULT_LEVEL)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Startup configuration errors. These are reported before any game state exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("level must be from {min} to {max} (got {level})")]
    LevelOutOfRange { level: u32, min: u32, max: u32 },
    #[error("key string must name exactly 7 keys (got {0})")]
    KeyCount(usize),
    #[error("duplicate command keys specified ({0:?})")]
    DuplicateKey(char),
}
