use crate::board::Board;
use crate::game_state::Status;
use crate::shapes::Shape;
use crate::types::{Level, B_COLS, B_SIZE};

/// Everything a renderer needs to draw one frame.
///
/// Taken while the active piece is painted, so `cells` shows it as occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: [bool; B_SIZE],
    pub score: u32,
    pub level: Level,
    /// Preview of the next piece; `None` when previews are off.
    pub next: Option<Shape>,
    pub status: Status,
}

impl GameSnapshot {
    pub fn new(board: &Board, score: u32, level: Level, next: Option<Shape>, status: Status) -> Self {
        Self {
            cells: *board.cells(),
            score,
            level,
            next,
            status,
        }
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * B_COLS + col]
    }

    /// Copy without the next-piece preview.
    pub fn without_preview(mut self) -> Self {
        self.next = None;
        self
    }
}
