use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tty_tetris::core::{Anchor, Board, GameState, ShapeLibrary};
use tty_tetris::types::{Cell, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut seed = 12345;

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if black_box(state.tick()).is_terminal() {
                seed += 1;
                state = GameState::new(seed);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for row in 16..20 {
                for col in 0..14 {
                    board.set(row, col, Cell::Filled);
                }
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shapes = ShapeLibrary::pieces();

    c.bench_function("rotate_all_shapes", |b| {
        b.iter(|| {
            for (_, shape) in &shapes {
                black_box(shape.rotate_cw());
            }
        })
    });
}

fn bench_spawn_check(c: &mut Criterion) {
    let board = Board::default();
    let shape = ShapeLibrary::shape(PieceKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| black_box(board.can_place(&shape, black_box(Anchor::new(0, 4)))))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate,
    bench_spawn_check
);
criterion_main!(benches);
