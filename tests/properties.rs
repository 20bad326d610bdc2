//! Property tests for the board, placement, row removal and randomizer.

use proptest::prelude::*;

use tetris_bsd::core::{elide, fits_at, place, Board, Randomizer, Shape, ShuffleMode};
use tetris_bsd::types::{ACTIVE_ROWS, A_FIRST, A_LAST, B_SIZE, INTERIOR_WIDTH};

/// Random interior occupancy, with some rows forced full so removals happen.
fn board_strategy() -> impl Strategy<Value = Board> {
    (
        proptest::collection::vec(any::<bool>(), ACTIVE_ROWS * INTERIOR_WIDTH),
        proptest::collection::vec(prop::bool::weighted(0.2), ACTIVE_ROWS),
    )
        .prop_map(|(cells, full_rows)| {
            let mut board = Board::new();
            for (i, occupied) in cells.into_iter().enumerate() {
                let row = A_FIRST + i / INTERIOR_WIDTH;
                let col = 1 + i % INTERIOR_WIDTH;
                let full = full_rows[row - A_FIRST];
                board.set_occupied(Board::index(row, col), occupied || full);
            }
            board
        })
}

/// Mostly empty boards, so plenty of anchors fit.
fn sparse_board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::vec(prop::bool::weighted(0.15), ACTIVE_ROWS * INTERIOR_WIDTH).prop_map(
        |cells| {
            Board::with_occupied(cells.into_iter().enumerate().filter(|(_, occupied)| *occupied).map(
                |(i, _)| Board::index(A_FIRST + i / INTERIOR_WIDTH, 1 + i % INTERIOR_WIDTH),
            ))
        },
    )
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (0..Shape::ALL.len()).prop_map(|i| Shape::ALL[i])
}

fn sentinels_intact(board: &Board) -> bool {
    (0..B_SIZE)
        .filter(|&idx| Board::is_sentinel(idx))
        .all(|idx| board.is_occupied(idx))
}

proptest! {
    #[test]
    fn fits_iff_no_cell_is_occupied(
        board in board_strategy(),
        shape in shape_strategy(),
        anchor in 0..B_SIZE,
    ) {
        let expected = shape
            .cells(anchor)
            .map_or(false, |cells| cells.iter().all(|&idx| !board.is_occupied(idx)));
        prop_assert_eq!(fits_at(&board, shape, anchor), expected);
    }

    #[test]
    fn place_then_erase_restores_board(
        board in sparse_board_strategy(),
        shape in shape_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let fitting: Vec<usize> = (0..B_SIZE).filter(|&a| fits_at(&board, shape, a)).collect();
        prop_assert!(!fitting.is_empty());
        let anchor = fitting[pick.index(fitting.len())];

        let mut scratch = board.clone();
        place(&mut scratch, shape, anchor, true);
        prop_assert!(!fits_at(&scratch, shape, anchor));
        place(&mut scratch, shape, anchor, false);
        prop_assert_eq!(scratch, board);
    }

    #[test]
    fn elide_leaves_no_full_rows(board in board_strategy()) {
        let full_before = (A_FIRST..A_LAST).filter(|&row| board.is_row_full(row)).count();
        let count_before = board.occupied_count();

        let mut after = board.clone();
        let cleared = elide(&mut after);

        prop_assert_eq!(cleared.len(), full_before);
        prop_assert!((A_FIRST..A_LAST).all(|row| !after.is_row_full(row)));
        prop_assert_eq!(after.occupied_count(), count_before - cleared.len() * INTERIOR_WIDTH);
        prop_assert!(sentinels_intact(&after));
    }

    #[test]
    fn initialize_restores_layout(board in board_strategy()) {
        let mut board = board;
        board.initialize();
        prop_assert_eq!(board.occupied_count(), 0);
        prop_assert!(sentinels_intact(&board));
    }

    #[test]
    fn every_bag_holds_each_shape_once(seed in any::<u32>(), uniform in any::<bool>()) {
        let mode = if uniform { ShuffleMode::FisherYates } else { ShuffleMode::Swaps };
        let mut rng = Randomizer::with_mode(seed, mode);
        for _ in 0..5 {
            prop_assert!(rng.at_bag_boundary());
            let mut bag: Vec<usize> = (0..7).map(|_| rng.next_index()).collect();
            bag.sort_unstable();
            prop_assert_eq!(bag, (0..7).collect::<Vec<_>>());
        }
    }
}
