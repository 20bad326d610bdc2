//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the classic BSD terminal game: the sentinel
//! board, the nineteen shape orientations, the bag randomizer, row clearing and
//! the falling-piece state machine. The event loop lives here too, but it only
//! talks to the outside world through the traits in [`ports`].
//!
//! # Module Structure
//!
//! - [`board`]: 12x23 cell buffer with wall and floor sentinels
//! - [`shapes`]: the 19 orientations and their rotation successors
//! - [`placement`]: fit checks and paint/erase of a shape on the board
//! - [`lines`]: full-row removal
//! - [`rng`]: deterministic generator and 7-piece bag
//! - [`game_state`]: gravity, commands, scoring, game over
//! - [`game_loop`]: timer-driven loop over the collaborator traits
//!
//! # Example
//!
//! ```
//! use tetris_bsd_core::{GameState, Outcome, Randomizer};
//! use tetris_bsd_core::types::{Command, Level};
//!
//! let mut game = GameState::new(Level::default(), Randomizer::new(12345));
//! game.apply(Command::Left);
//! assert!(matches!(game.apply(Command::HardDrop), Outcome::Dropped { .. }));
//! assert!(game.score() > 0);
//!
//! // The piece is resting on the stack; the next gravity tick locks it.
//! assert!(matches!(game.tick(), Outcome::Locked { .. }));
//! ```

pub mod board;
pub mod config;
pub mod game_loop;
pub mod game_state;
pub mod lines;
pub mod placement;
pub mod ports;
pub mod rng;
pub mod shapes;
pub mod snapshot;
pub mod timer;

pub use tetris_bsd_types as types;

pub use board::Board;
pub use config::GameConfig;
pub use game_loop::{play, report_scores, run, EndReason, GameSummary, PAUSED_MESSAGE};
pub use game_state::{GameState, Outcome, Status};
pub use lines::{elide, elide_with, ClearedRows, ElideStage};
pub use placement::{fits_at, place, Painted};
pub use ports::{Input, InputSource, Renderer, ScoreSink};
pub use rng::{Randomizer, ShuffleMode, SimpleRng};
pub use shapes::Shape;
pub use snapshot::GameSnapshot;
pub use timer::FallTimer;
