//! Game state module - the falling-piece state machine
//!
//! `GameState` owns the board, the active and next pieces, the score and the
//! randomizer. It reacts to two kinds of events: the gravity timer running out
//! ([`GameState::tick`]) and player commands ([`GameState::apply`]). It does no
//! I/O; the game loop feeds it events and draws its snapshots.
//!
//! Between events the board holds locked cells only. The active piece is painted
//! in just long enough to take a snapshot.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::lines::{elide_with, ClearedRows};
use crate::placement::{fits_at, place, Painted};
use crate::rng::Randomizer;
use crate::shapes::Shape;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Level, B_COLS, SPAWN_ANCHOR};

/// Rotation fallbacks, tried in order: anchor shift, plus a shift that must also
/// fit on its own before the combined one is considered.
const ROTATION_KICKS: [(isize, Option<isize>); 6] = [
    (0, None),
    (1, None),
    (-1, None),
    (B_COLS as isize, None),
    (B_COLS as isize + 1, Some(1)),
    (B_COLS as isize - 1, Some(-1)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Piece active, gravity running.
    Falling,
    /// Gravity suspended until the player resumes.
    Paused,
    /// A piece is being locked and rows cleared; only observed from inside a tick.
    Locking,
    /// The next piece could not spawn.
    GameOver,
    /// The player quit.
    Quit,
}

/// What an event did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The piece moved or turned.
    Moved,
    /// The move did not fit; nothing changed.
    Blocked,
    /// Hard drop: the piece fell `rows` rows, one point each.
    Dropped { rows: u32 },
    /// The piece locked, `cleared` rows were removed and the next piece spawned.
    Locked { cleared: usize },
    /// The piece locked but the next one does not fit.
    GameOver { cleared: usize },
    Paused,
    Quit,
    /// The event does not apply in the current status.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Shape,
    next: Shape,
    anchor: usize,
    score: u32,
    level: Level,
    status: Status,
    randomizer: Randomizer,
    pieces_locked: u32,
    rows_cleared: u32,
}

impl GameState {
    /// Start a game: fresh board, next piece drawn before the current one.
    pub fn new(level: Level, mut randomizer: Randomizer) -> Self {
        let next = randomizer.next_shape();
        let current = randomizer.next_shape();
        Self {
            board: Board::new(),
            current,
            next,
            anchor: SPAWN_ANCHOR,
            score: 0,
            level,
            status: Status::Falling,
            randomizer,
            pieces_locked: 0,
            rows_cleared: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.level,
            Randomizer::with_mode(config.seed, config.shuffle),
        )
    }

    /// Start from a prepared board (tests, benchmarks, puzzles).
    pub fn with_board(board: Board, level: Level, randomizer: Randomizer) -> Self {
        let mut state = Self::new(level, randomizer);
        state.board = board;
        if !state.fits(state.current, state.anchor) {
            state.status = Status::GameOver;
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Shape {
        self.current
    }

    pub fn next(&self) -> Shape {
        self.next
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::GameOver | Status::Quit)
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Move the active piece to `anchor` with `shape` if it fits there.
    ///
    /// Intended for setting up positions in tests and tools.
    pub fn reposition(&mut self, shape: Shape, anchor: usize) -> bool {
        if !self.fits(shape, anchor) {
            return false;
        }
        self.current = shape;
        self.anchor = anchor;
        true
    }

    #[inline]
    fn fits(&self, shape: Shape, anchor: usize) -> bool {
        fits_at(&self.board, shape, anchor)
    }

    fn fits_offset(&self, shape: Shape, delta: isize) -> Option<usize> {
        let anchor = self.anchor.checked_add_signed(delta)?;
        self.fits(shape, anchor).then_some(anchor)
    }

    /// Frame with the active piece painted in.
    ///
    /// After game over the piece that failed to spawn is not painted.
    pub fn snapshot(&mut self) -> GameSnapshot {
        let (score, level, next, status) = (self.score, self.level, self.next, self.status);
        if status == Status::GameOver {
            return GameSnapshot::new(&self.board, score, level, Some(next), status);
        }
        let painted = Painted::new(&mut self.board, self.current, self.anchor);
        GameSnapshot::new(painted.board(), score, level, Some(next), status)
    }

    /// Gravity: fall one row, or lock the piece if it cannot.
    pub fn tick(&mut self) -> Outcome {
        self.tick_with(|_| {})
    }

    /// Like [`GameState::tick`], reporting every intermediate frame of a row clear.
    pub fn tick_with(&mut self, on_clear: impl FnMut(&GameSnapshot)) -> Outcome {
        if self.status != Status::Falling {
            return Outcome::Ignored;
        }
        if let Some(below) = self.fits_offset(self.current, B_COLS as isize) {
            self.anchor = below;
            return Outcome::Moved;
        }
        self.lock_and_spawn(on_clear)
    }

    fn lock_and_spawn(&mut self, mut on_clear: impl FnMut(&GameSnapshot)) -> Outcome {
        self.status = Status::Locking;
        place(&mut self.board, self.current, self.anchor, true);
        self.score += 1;
        self.pieces_locked += 1;

        let (score, level, next) = (self.score, self.level, self.next);
        let cleared: ClearedRows = elide_with(&mut self.board, |board, _, _| {
            on_clear(&GameSnapshot::new(board, score, level, Some(next), Status::Locking));
        });
        self.rows_cleared += cleared.len() as u32;
        debug!(
            shape = ?self.current,
            anchor = self.anchor,
            score = self.score,
            cleared = cleared.len(),
            "piece locked"
        );

        self.current = self.next;
        self.next = self.randomizer.next_shape();
        self.anchor = SPAWN_ANCHOR;

        if !self.fits(self.current, self.anchor) {
            self.status = Status::GameOver;
            info!(score = self.score, pieces = self.pieces_locked, "game over");
            return Outcome::GameOver {
                cleared: cleared.len(),
            };
        }
        self.status = Status::Falling;
        Outcome::Locked {
            cleared: cleared.len(),
        }
    }

    /// Apply a player command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        if command == Command::Quit && !self.is_finished() {
            self.status = Status::Quit;
            return Outcome::Quit;
        }
        if self.status != Status::Falling {
            return Outcome::Ignored;
        }

        match command {
            Command::Left => self.shift(-1),
            Command::Right => self.shift(1),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.shift(B_COLS as isize),
            Command::HardDrop => self.hard_drop(),
            Command::Pause => {
                self.status = Status::Paused;
                Outcome::Paused
            }
            Command::Quit => Outcome::Ignored,
        }
    }

    /// Leave the paused state.
    pub fn resume(&mut self) -> bool {
        if self.status != Status::Paused {
            return false;
        }
        self.status = Status::Falling;
        true
    }

    fn shift(&mut self, delta: isize) -> Outcome {
        match self.fits_offset(self.current, delta) {
            Some(anchor) => {
                self.anchor = anchor;
                Outcome::Moved
            }
            None => Outcome::Blocked,
        }
    }

    fn hard_drop(&mut self) -> Outcome {
        let mut rows = 0;
        while let Some(below) = self.fits_offset(self.current, B_COLS as isize) {
            self.anchor = below;
            self.score += 1;
            rows += 1;
        }
        if rows == 0 {
            return Outcome::Blocked;
        }
        Outcome::Dropped { rows }
    }

    /// Turn the piece, trying the fallback anchors in order.
    pub fn rotate(&mut self) -> Outcome {
        let turned = self.current.rotated();
        for (delta, required) in ROTATION_KICKS {
            if let Some(required) = required {
                if self.fits_offset(turned, required).is_none() {
                    continue;
                }
            }
            if let Some(anchor) = self.fits_offset(turned, delta) {
                self.current = turned;
                self.anchor = anchor;
                return Outcome::Moved;
            }
        }
        Outcome::Blocked
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Level::default(), Randomizer::default())
    }
}
