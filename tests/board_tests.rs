//! Board tests - layout, placement and row removal through the public API

use tetris_bsd::core::{
    elide, fits_at, place, Board, GameState, Outcome, Painted, Randomizer, Shape, Status,
};
use tetris_bsd::types::{
    Command, Level, PieceKind, A_FIRST, A_LAST, B_COLS, B_ROWS, B_SIZE, INTERIOR_WIDTH, SPAWN_ANCHOR,
};

fn fill_row_except(board: &mut Board, row: usize, gap: Option<usize>) {
    for col in 1..B_COLS - 1 {
        if Some(col) != gap {
            board.set_occupied(Board::index(row, col), true);
        }
    }
}

#[test]
fn test_initialized_board_has_only_walls_and_floor() {
    let board = Board::new();
    for idx in 0..B_SIZE {
        let row = idx / B_COLS;
        let col = idx % B_COLS;
        let expected = row >= A_LAST || col == 0 || col == B_COLS - 1;
        assert_eq!(board.is_occupied(idx), expected, "row {row} col {col}");
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_initialize_resets_a_dirty_board() {
    let mut board = Board::new();
    fill_row_except(&mut board, 10, None);
    board.set_occupied(Board::index(0, 3), true);
    board.initialize();
    assert_eq!(board, Board::new());
}

#[test]
fn test_floor_spans_the_last_two_rows() {
    let board = Board::new();
    for row in A_LAST..B_ROWS {
        assert!(board.is_row_full(row));
        assert!((0..B_COLS).all(|col| board.is_occupied(Board::index(row, col))));
    }
    assert_eq!(board.interior(A_FIRST).len(), INTERIOR_WIDTH);
}

#[test]
fn test_fresh_board_spawn_fits_every_kind() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(fits_at(&board, Shape::spawn(kind), SPAWN_ANCHOR), "{kind:?}");
    }
    assert!(fits_at(&board, Shape::I, SPAWN_ANCHOR));
}

#[test]
fn test_filling_the_last_gap_clears_exactly_that_row() {
    let row = 15;
    let mut board = Board::new();
    fill_row_except(&mut board, row, Some(4));
    // Debris above and below the row.
    board.set_occupied(Board::index(12, 8), true);
    board.set_occupied(Board::index(row - 1, 2), true);
    board.set_occupied(Board::index(row + 1, 9), true);

    // A vertical I dropped into the gap, bottom cell on the row.
    let anchor = Board::index(row - 2, 4);
    assert!(fits_at(&board, Shape::I90, anchor));
    place(&mut board, Shape::I90, anchor, true);
    let before = board.occupied_count();

    let cleared = elide(&mut board);

    assert_eq!(cleared.as_slice(), &[row]);
    assert_eq!(board.occupied_count(), before - (B_COLS - 2));
    // Everything above moved down one row; the row below stayed put.
    assert!(board.is_occupied(Board::index(13, 8)));
    assert!(board.is_occupied(Board::index(row, 2)));
    assert!(board.is_occupied(Board::index(row + 1, 9)));
    for r in row - 2..=row {
        assert!(board.is_occupied(Board::index(r, 4)), "row {r}");
    }
}

#[test]
fn test_hard_drop_three_rows_above_floor() {
    let mut state = GameState::new(Level::default(), Randomizer::new(3));
    // O's lowest cells sit on its anchor row, so A_LAST - 1 is the resting row.
    let start = Board::index(A_LAST - 4, 5);
    assert!(state.reposition(Shape::O, start));

    assert_eq!(state.apply(Command::HardDrop), Outcome::Dropped { rows: 3 });
    assert_eq!(state.score(), 3);
    assert_eq!(state.anchor(), Board::index(A_LAST - 1, 5));
}

#[test]
fn test_blocked_spawn_ends_game_without_touching_board() {
    let mut board = Board::new();
    board.set_occupied(SPAWN_ANCHOR, true);
    let state = GameState::with_board(board.clone(), Level::default(), Randomizer::new(9));

    assert_eq!(state.status(), Status::GameOver);
    assert_eq!(state.board(), &board);
}

#[test]
fn test_painted_piece_is_visible_only_inside_guard() {
    let mut board = Board::new();
    let anchor = Board::index(10, 5);
    {
        let painted = Painted::new(&mut board, Shape::L, anchor);
        assert_eq!(painted.board().occupied_count(), 4);
        assert!(!fits_at(painted.board(), Shape::L, anchor));
    }
    assert_eq!(board.occupied_count(), 0);
    assert!(fits_at(&board, Shape::L, anchor));
}
