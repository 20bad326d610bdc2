//! Collision and placement - fit tests and painting shapes onto the board
//!
//! `fits_at` is a pure occupancy check: walls and floor are occupied cells, so any
//! anchor that would push a shape off the playfield collides with them.
//!
//! `place` is the single write primitive, used both to lock a piece for good and
//! to paint/erase the active piece around a redraw. Transient painting goes
//! through [`Painted`], which erases on drop, so outside a paint transaction the
//! board holds locked cells only.

use crate::board::Board;
use crate::shapes::Shape;

/// True iff every cell of `shape` anchored at `anchor` is on the board and empty.
pub fn fits_at(board: &Board, shape: Shape, anchor: usize) -> bool {
    match shape.cells(anchor) {
        Some(cells) => cells.iter().all(|&idx| !board.is_occupied(idx)),
        None => false,
    }
}

/// Write `value` into every cell of `shape` anchored at `anchor`.
///
/// # Panics
///
/// Panics if the shape reaches outside the board buffer. Callers only place
/// shapes at anchors that passed [`fits_at`] (or were painted from one).
pub fn place(board: &mut Board, shape: Shape, anchor: usize, value: bool) {
    let Some(cells) = shape.cells(anchor) else {
        panic!("{shape:?} at anchor {anchor} reaches outside the board");
    };
    for idx in cells {
        board.set_occupied(idx, value);
    }
}

/// The active piece painted onto the board for the lifetime of the guard.
pub struct Painted<'a> {
    board: &'a mut Board,
    shape: Shape,
    anchor: usize,
}

impl<'a> Painted<'a> {
    pub fn new(board: &'a mut Board, shape: Shape, anchor: usize) -> Self {
        place(board, shape, anchor, true);
        Self {
            board,
            shape,
            anchor,
        }
    }

    /// Board with the piece painted in.
    pub fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Painted<'_> {
    fn drop(&mut self) {
        place(self.board, self.shape, self.anchor, false);
    }
}
