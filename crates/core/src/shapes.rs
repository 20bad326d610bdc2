//! Shape catalog - every tetromino orientation and its rotation successor
//!
//! Each orientation is its own variant. Offsets are `(dcol, drow)` pairs relative
//! to the anchor cell (the anchor itself is always the first entry), and rotation
//! is a declared successor rather than a geometric computation. Rotation turns a
//! piece 90° counter-clockwise on screen; numeric suffixes count those turns in
//! degrees from the spawn orientation.

use crate::types::{PieceKind, B_COLS, B_SIZE};

/// Offset of a single mino relative to the anchor, `(dcol, drow)`.
pub type MinoOffset = (i8, i8);

/// Four mino offsets, anchor first.
pub type ShapeOffsets = [MinoOffset; 4];

const TL: MinoOffset = (-1, -1);
const TC: MinoOffset = (0, -1);
const TR: MinoOffset = (1, -1);
const ML: MinoOffset = (-1, 0);
const MR: MinoOffset = (1, 0);
const BL: MinoOffset = (-1, 1);
const BC: MinoOffset = (0, 1);
const BR: MinoOffset = (1, 1);
const ANCHOR: MinoOffset = (0, 0);

/// One orientation of one tetromino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Z,
    Z90,
    S,
    S90,
    T,
    T90,
    T180,
    T270,
    O,
    L,
    L90,
    L180,
    L270,
    J,
    J90,
    J180,
    J270,
    I,
    I90,
}

impl Shape {
    /// Every orientation in the catalog.
    pub const ALL: [Shape; 19] = [
        Shape::Z,
        Shape::Z90,
        Shape::S,
        Shape::S90,
        Shape::T,
        Shape::T90,
        Shape::T180,
        Shape::T270,
        Shape::O,
        Shape::L,
        Shape::L90,
        Shape::L180,
        Shape::L270,
        Shape::J,
        Shape::J90,
        Shape::J180,
        Shape::J270,
        Shape::I,
        Shape::I90,
    ];

    /// Spawn orientation of a piece kind.
    pub fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Z => Shape::Z,
            PieceKind::S => Shape::S,
            PieceKind::T => Shape::T,
            PieceKind::O => Shape::O,
            PieceKind::L => Shape::L,
            PieceKind::J => Shape::J,
            PieceKind::I => Shape::I,
        }
    }

    /// Spawn orientation for a randomizer index (0..7).
    pub fn from_index(index: usize) -> Self {
        Self::spawn(PieceKind::from_index(index))
    }

    pub fn kind(self) -> PieceKind {
        match self {
            Shape::Z | Shape::Z90 => PieceKind::Z,
            Shape::S | Shape::S90 => PieceKind::S,
            Shape::T | Shape::T90 | Shape::T180 | Shape::T270 => PieceKind::T,
            Shape::O => PieceKind::O,
            Shape::L | Shape::L90 | Shape::L180 | Shape::L270 => PieceKind::L,
            Shape::J | Shape::J90 | Shape::J180 | Shape::J270 => PieceKind::J,
            Shape::I | Shape::I90 => PieceKind::I,
        }
    }

    /// The orientation reached by turning this one 90°.
    pub fn rotated(self) -> Self {
        match self {
            Shape::Z => Shape::Z90,
            Shape::Z90 => Shape::Z,
            Shape::S => Shape::S90,
            Shape::S90 => Shape::S,
            Shape::T => Shape::T90,
            Shape::T90 => Shape::T180,
            Shape::T180 => Shape::T270,
            Shape::T270 => Shape::T,
            Shape::O => Shape::O,
            Shape::L => Shape::L90,
            Shape::L90 => Shape::L180,
            Shape::L180 => Shape::L270,
            Shape::L270 => Shape::L,
            Shape::J => Shape::J90,
            Shape::J90 => Shape::J180,
            Shape::J180 => Shape::J270,
            Shape::J270 => Shape::J,
            Shape::I => Shape::I90,
            Shape::I90 => Shape::I,
        }
    }

    pub fn offsets(self) -> ShapeOffsets {
        match self {
            // XX.
            // .XX
            Shape::Z => [ANCHOR, TL, TC, MR],
            Shape::Z90 => [ANCHOR, TC, ML, BL],
            // .XX
            // XX.
            Shape::S => [ANCHOR, TC, TR, ML],
            Shape::S90 => [ANCHOR, TC, MR, BR],
            // XXX
            // .X.
            Shape::T => [ANCHOR, ML, MR, BC],
            Shape::T90 => [ANCHOR, TC, MR, BC],
            Shape::T180 => [ANCHOR, TC, ML, MR],
            Shape::T270 => [ANCHOR, TC, ML, BC],
            Shape::O => [ANCHOR, TL, TC, ML],
            // XXX
            // X..
            Shape::L => [ANCHOR, ML, BL, MR],
            Shape::L90 => [ANCHOR, TC, BC, BR],
            Shape::L180 => [ANCHOR, TR, ML, MR],
            Shape::L270 => [ANCHOR, TL, TC, BC],
            // XXX
            // ..X
            Shape::J => [ANCHOR, ML, BR, MR],
            Shape::J90 => [ANCHOR, TR, TC, BC],
            Shape::J180 => [ANCHOR, TL, MR, ML],
            Shape::J270 => [ANCHOR, BC, BL, TC],
            // XXXX, anchor second from the left
            Shape::I => [ANCHOR, ML, MR, (2, 0)],
            Shape::I90 => [ANCHOR, TC, BC, (0, 2)],
        }
    }

    /// Board indices covered when anchored at `anchor`.
    ///
    /// Returns `None` if any cell would fall outside the board buffer.
    pub fn cells(self, anchor: usize) -> Option<[usize; 4]> {
        let mut out = [0usize; 4];
        for (slot, &(dcol, drow)) in out.iter_mut().zip(self.offsets().iter()) {
            let delta = isize::from(drow) * B_COLS as isize + isize::from(dcol);
            let idx = anchor.checked_add_signed(delta)?;
            if idx >= B_SIZE {
                return None;
            }
            *slot = idx;
        }
        Some(out)
    }
}
