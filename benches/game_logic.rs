use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_bsd::core::{elide, fits_at, Board, GameState, Randomizer, Shape};
use tetris_bsd::types::{Command, Level, A_LAST, B_COLS, SPAWN_ANCHOR};

fn bench_fits_at(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("fits_at_spawn", |b| {
        b.iter(|| fits_at(black_box(&board), black_box(Shape::T), black_box(SPAWN_ANCHOR)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in A_LAST - 4..A_LAST {
                for col in 1..B_COLS - 1 {
                    board.set_occupied(Board::index(row, col), true);
                }
            }
            elide(&mut board)
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("gravity_tick", |b| {
        b.iter_batched(
            || GameState::new(Level::default(), Randomizer::new(12345)),
            |mut state| state.tick(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_hard_drop_and_lock(c: &mut Criterion) {
    c.bench_function("hard_drop_and_lock", |b| {
        b.iter_batched(
            || GameState::new(Level::default(), Randomizer::new(12345)),
            |mut state| {
                state.apply(Command::HardDrop);
                state.tick()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(Level::default(), Randomizer::new(12345));

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.apply(black_box(Command::Rotate));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(Level::default(), Randomizer::new(12345));

    c.bench_function("snapshot", |b| b.iter(|| state.snapshot()));
}

criterion_group!(
    benches,
    bench_fits_at,
    bench_line_clear,
    bench_tick,
    bench_hard_drop_and_lock,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
