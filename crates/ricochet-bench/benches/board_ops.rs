//! Criterion micro-benchmarks for board construction and topology queries.

use criterion::{criterion_group, criterion_main, Criterion};
use ricochet_bench::{reference_board, reference_layout};
use ricochet_core::{Direction, Position};
use ricochet_test_utils::RobotSquad;
use std::hint::black_box;

/// Benchmark: validate a 16x16 layout with four robots.
fn bench_board_new_16(c: &mut Criterion) {
    let squad = RobotSquad::new();
    let robots = squad.all();

    c.bench_function("board_new_16x16", |b| {
        b.iter(|| {
            let tiles = reference_layout(16, 7, &robots);
            let board = ricochet_board::Board::new(robots.clone(), tiles).unwrap();
            black_box(board);
        });
    });
}

/// Benchmark: validate a 256x256 layout (64K cells).
fn bench_board_new_256(c: &mut Criterion) {
    let squad = RobotSquad::new();
    let robots = squad.all();

    c.bench_function("board_new_256x256", |b| {
        b.iter(|| {
            let tiles = reference_layout(256, 7, &robots);
            let board = ricochet_board::Board::new(robots.clone(), tiles).unwrap();
            black_box(board);
        });
    });
}

/// Benchmark: is_connected() in every direction on all cells of a 100x100 board.
fn bench_is_connected_10k(c: &mut Criterion) {
    let board = reference_board(100, 11, RobotSquad::new().all()).unwrap();

    c.bench_function("is_connected_100x100", |b| {
        b.iter(|| {
            let mut open = 0usize;
            for row in 0..100 {
                for col in 0..100 {
                    let p = Position::new(row, col);
                    for d in Direction::ALL {
                        open += board.is_connected(p, d) as usize;
                    }
                }
            }
            black_box(open);
        });
    });
}

/// Benchmark: direction algebra over all four directions.
fn bench_direction_algebra(c: &mut Criterion) {
    c.bench_function("direction_algebra", |b| {
        b.iter(|| {
            for d in Direction::ALL {
                let d = black_box(d);
                black_box((d.opposite(), d.perpendicular(), d.offset(), d.bit()));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_board_new_16,
    bench_board_new_256,
    bench_is_connected_10k,
    bench_direction_algebra
);
criterion_main!(benches);
