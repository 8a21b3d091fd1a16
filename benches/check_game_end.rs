//! Terminal-check cost on full drawn boards of increasing size.
//!
//! A drawn board is the worst case: every line is scanned and none
//! completes before the full-board check runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_tictactoe::{FixedStart, GameEngine, Outcome, Player};

/// Owner of `(row, column)` in a tiling with no complete line.
///
/// Columns pair up (`XXOO...`) and odd rows are inverted, so every row,
/// column and diagonal mixes both marks once `size >= 4`. Even sizes split
/// the cells evenly between the players.
fn tile_owner(row: usize, column: usize) -> Player {
    if (column / 2 + row) % 2 == 0 {
        Player::PlayerOne
    } else {
        Player::PlayerTwo
    }
}

/// An engine whose board is full and drawn.
///
/// # Panics
///
/// Panics if `size` is odd or below 4.
fn drawn_engine(size: usize) -> GameEngine<FixedStart> {
    assert!(size >= 4 && size % 2 == 0, "drawn tiling needs an even size >= 4");

    let (ones, twos): (Vec<_>, Vec<_>) = (0..size)
        .flat_map(|row| (0..size).map(move |column| (row, column)))
        .partition(|&(row, column)| tile_owner(row, column) == Player::PlayerOne);
    assert_eq!(ones.len(), twos.len());

    let mut engine = GameEngine::with_source(size, FixedStart(Player::PlayerOne));
    for (&one, &two) in ones.iter().zip(&twos) {
        for (row, column) in [one, two] {
            engine.make_move(row, column).unwrap();
        }
    }

    assert!(engine.board().is_full());
    assert_eq!(engine.check_game_end(), Outcome::Draw);
    engine
}

fn bench_check_game_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_game_end");
    for size in [4usize, 6, 8, 16] {
        let engine = drawn_engine(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter(|| black_box(engine.check_game_end()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_check_game_end);
criterion_main!(benches);
