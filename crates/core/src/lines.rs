//! Line clearer - removes full rows and drops the stack above them
//!
//! Rows are scanned top to bottom over the active region. A full row is first
//! blanked, then everything above it moves down one row; the hidden top row is
//! refilled with empty interior cells. Because a collapse only moves rows that were
//! already scanned, one pass clears every full row.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{A_FIRST, A_LAST, ACTIVE_ROWS};

/// Indices of the rows removed by one [`elide`] call, top to bottom.
pub type ClearedRows = ArrayVec<usize, ACTIVE_ROWS>;

/// Point in a row removal at which observers are notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElideStage {
    /// The full row has been blanked; nothing has moved yet.
    Cleared,
    /// The rows above have dropped into place.
    Collapsed,
}

/// Remove every full active row.
pub fn elide(board: &mut Board) -> ClearedRows {
    elide_with(board, |_, _, _| {})
}

/// Remove every full active row, calling `on_change(board, row, stage)` twice per
/// removed row so a renderer can show the intermediate state.
pub fn elide_with(
    board: &mut Board,
    mut on_change: impl FnMut(&Board, usize, ElideStage),
) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    for row in A_FIRST..A_LAST {
        if !board.is_row_full(row) {
            continue;
        }

        board.interior_mut(row).fill(false);
        on_change(board, row, ElideStage::Cleared);

        collapse_onto(board, row);
        on_change(board, row, ElideStage::Collapsed);

        cleared.push(row);
    }
    cleared
}

/// Shift rows `0..row` down by one, overwriting `row`.
fn collapse_onto(board: &mut Board, row: usize) {
    for dst in (1..=row).rev() {
        board.copy_row(dst - 1, dst);
    }
    board.interior_mut(0).fill(false);
}
