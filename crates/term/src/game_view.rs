//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, for a viewport of at least [`MIN_WIDTH`] x [`MIN_HEIGHT`]:
//! the board (displayed rows only, walls and visible floor included) is centered
//! horizontally one row below the top, each cell two columns wide. Score, level
//! and the optional next-shape preview sit in a panel to its left, and the
//! message line runs centered underneath.

use crate::core::{Board, GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{B_COLS, D_FIRST, D_LAST};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

const TOP_MARGIN: u16 = 1;
const PANEL_WIDTH: u16 = 12;
const PANEL_GAP: u16 = 4;

const WALL: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130)).reversed();
const BLOCK: CellStyle = CellStyle::PLAIN.reversed();
const LABEL: CellStyle = CellStyle::PLAIN.bold();
const MESSAGE: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80));

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_large_enough(&self) -> bool {
        self.width >= MIN_WIDTH && self.height >= MIN_HEIGHT
    }
}

/// Screen positions derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    pub panel_x: u16,
    pub message_y: u16,
}

impl Layout {
    pub fn for_viewport(viewport: Viewport, cell_w: u16) -> Self {
        let board_w = B_COLS as u16 * cell_w;
        let board_h = (D_LAST - D_FIRST) as u16;
        let board_x = viewport.width.saturating_sub(board_w) / 2;
        Self {
            board_x,
            board_y: TOP_MARGIN,
            panel_x: board_x.saturating_sub(PANEL_WIDTH + PANEL_GAP),
            message_y: TOP_MARGIN + board_h + 1,
        }
    }
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        Layout::for_viewport(viewport, self.cell_w)
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// With no snapshot yet only the message line is drawn.
    pub fn render_into(
        &self,
        snap: Option<&GameSnapshot>,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        let layout = self.layout(viewport);

        if let Some(snap) = snap {
            self.draw_board(fb, snap, layout);
            self.draw_panel(fb, snap, layout);
        }
        if let Some(text) = message {
            fb.put_str_centered(layout.message_y, text, MESSAGE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: Option<&GameSnapshot>,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, message, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        for row in D_FIRST..D_LAST {
            let y = layout.board_y + (row - D_FIRST) as u16;
            for col in 0..B_COLS {
                if !snap.is_occupied(row, col) {
                    continue;
                }
                let style = if Board::is_sentinel(Board::index(row, col)) {
                    WALL
                } else {
                    BLOCK
                };
                let x = layout.board_x + col as u16 * self.cell_w;
                fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let x = layout.panel_x;
        let mut y = layout.board_y + 1;

        fb.put_str(x, y, "Score:", LABEL);
        fb.put_u32(x + 7, y, snap.score, CellStyle::PLAIN);
        y += 1;
        fb.put_str(x, y, "Level:", LABEL);
        fb.put_u32(x + 7, y, snap.level.get(), CellStyle::PLAIN);
        y += 3;

        if let Some(next) = snap.next {
            fb.put_str(x, y, "Next shape:", LABEL);
            self.draw_preview(fb, next, x + self.cell_w, y + 2);
        }
    }

    /// Draw `shape` with its anchor at `(x, y)`.
    fn draw_preview(&self, fb: &mut FrameBuffer, shape: Shape, x: u16, y: u16) {
        for (dcol, drow) in shape.offsets() {
            let px = x.saturating_add_signed(i16::from(dcol) * self.cell_w as i16);
            let py = y.saturating_add_signed(i16::from(drow));
            fb.fill_rect(px, py, self.cell_w, 1, ' ', BLOCK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Randomizer, Status};
    use crate::types::{Level, A_LAST, SPAWN_ANCHOR};

    fn viewport() -> Viewport {
        Viewport::new(MIN_WIDTH, MIN_HEIGHT)
    }

    fn empty_snapshot(next: Option<Shape>) -> GameSnapshot {
        GameSnapshot::new(&Board::new(), 0, Level::default(), next, Status::Falling)
    }

    #[test]
    fn layout_fits_minimum_terminal() {
        let layout = GameView::default().layout(viewport());
        assert_eq!(layout.board_x, 28);
        assert_eq!(layout.board_y, 1);
        assert_eq!(layout.message_y, 23);
        assert!(layout.message_y < MIN_HEIGHT);
        assert!(layout.panel_x + PANEL_WIDTH < layout.board_x);
    }

    #[test]
    fn walls_and_floor_are_drawn() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let fb = view.render(Some(&empty_snapshot(None)), None, viewport());

        let top = layout.board_y;
        let floor = layout.board_y + (A_LAST - D_FIRST) as u16;
        let right = layout.board_x + (B_COLS as u16 - 1) * 2;
        assert_eq!(fb.get(layout.board_x, top).unwrap().style, WALL);
        assert_eq!(fb.get(right + 1, top).unwrap().style, WALL);
        assert_eq!(fb.get(layout.board_x + 2, top).unwrap().style, CellStyle::PLAIN);
        for x in layout.board_x..right + 2 {
            assert_eq!(fb.get(x, floor).unwrap().style, WALL);
        }
    }

    #[test]
    fn locked_cell_is_two_columns_wide() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let board = Board::with_occupied([Board::index(20, 1)]);
        let snap = GameSnapshot::new(&board, 0, Level::default(), None, Status::Falling);
        let fb = view.render(Some(&snap), None, viewport());

        let x = layout.board_x + 2;
        let y = layout.board_y + (20 - D_FIRST) as u16;
        assert_eq!(fb.get(x, y).unwrap().style, BLOCK);
        assert_eq!(fb.get(x + 1, y).unwrap().style, BLOCK);
        assert_eq!(fb.get(x + 2, y).unwrap().style, CellStyle::PLAIN);
    }

    #[test]
    fn active_piece_appears_in_frame() {
        let mut state = GameState::new(Level::default(), Randomizer::new(7));
        let snap = state.snapshot();
        let view = GameView::default();
        let layout = view.layout(viewport());
        let fb = view.render(Some(&snap), None, viewport());

        let x = layout.board_x + (SPAWN_ANCHOR % B_COLS) as u16 * 2;
        let y = layout.board_y;
        assert_eq!(fb.get(x, y).unwrap().style, BLOCK);
    }

    #[test]
    fn panel_shows_score_level_and_preview() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let mut snap = empty_snapshot(Some(Shape::O));
        snap.score = 1234;
        let fb = view.render(Some(&snap), None, viewport());

        let score_row = fb.row_text(layout.board_y + 1);
        assert!(score_row.contains("Score: 1234"), "{score_row:?}");
        assert!(fb.row_text(layout.board_y + 2).contains("Level: 2"));
        assert!(fb.row_text(layout.board_y + 5).contains("Next shape:"));

        let preview_blocks = (0..MIN_HEIGHT)
            .flat_map(|y| (0..layout.board_x).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().style == BLOCK)
            .count();
        assert_eq!(preview_blocks, 4 * 2);
    }

    #[test]
    fn preview_hidden_without_next_shape() {
        let view = GameView::default();
        let fb = view.render(Some(&empty_snapshot(None)), None, viewport());
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(!all.contains("Next shape:"));
    }

    #[test]
    fn message_is_centered_below_board() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let fb = view.render(None, Some("paused"), viewport());
        assert_eq!(fb.row_text(layout.message_y).trim_start(), "paused");
        assert_eq!(fb.get(37, layout.message_y).unwrap().ch, 'p');
        assert_eq!(fb.get(37, layout.message_y).unwrap().style, MESSAGE);
    }
}
