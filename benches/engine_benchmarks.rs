//! Benchmarks for checkers engine performance.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use checkers_engine::{Board, BoardBuilder, Cell, Engine, NullPublisher, Rank, Team};

fn cell(index: usize) -> Cell {
    Cell::from_index(index).unwrap()
}

/// Crowded midgame-style position with kings on both sides.
fn midgame_board() -> Board {
    BoardBuilder::new()
        .piece(cell(1), Team::Dark, Rank::Man)
        .piece(cell(10), Team::Dark, Rank::Man)
        .piece(cell(12), Team::Dark, Rank::Man)
        .piece(cell(19), Team::Dark, Rank::King)
        .piece(cell(21), Team::Dark, Rank::Man)
        .piece(cell(28), Team::Light, Rank::Man)
        .piece(cell(30), Team::Light, Rank::Man)
        .piece(cell(37), Team::Light, Rank::King)
        .piece(cell(42), Team::Light, Rank::Man)
        .piece(cell(51), Team::Light, Rank::Man)
        .build()
}

fn bench_mobility(c: &mut Criterion) {
    let mut group = c.benchmark_group("mobility");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| {
            black_box(startpos.has_any_move(black_box(Team::Dark)))
                && black_box(startpos.has_any_move(black_box(Team::Light)))
        })
    });

    let midgame = midgame_board();
    group.bench_function("midgame", |b| {
        b.iter(|| {
            black_box(midgame.has_any_move(black_box(Team::Dark)))
                && black_box(midgame.has_any_move(black_box(Team::Light)))
        })
    });

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    group.bench_function("startpos_front_row", |b| {
        let mut engine = Engine::standard(NullPublisher);
        b.iter(|| {
            for index in [17usize, 19, 21, 23] {
                engine.select_for_move(black_box(index));
            }
        })
    });

    group.finish();
}

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");

    group.bench_function("opening_step", |b| {
        b.iter_batched(
            || Engine::standard(NullPublisher),
            |mut engine| {
                engine.select_for_move(21);
                black_box(engine.apply_move(black_box(28)))
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("triple_jump_chain", |b| {
        b.iter_batched(
            || {
                let board = BoardBuilder::new()
                    .piece(cell(1), Team::Dark, Rank::Man)
                    .piece(cell(10), Team::Light, Rank::Man)
                    .piece(cell(26), Team::Light, Rank::Man)
                    .piece(cell(42), Team::Light, Rank::Man)
                    .piece(cell(63), Team::Light, Rank::Man)
                    .build();
                Engine::new(checkers_engine::Game::new(), board, NullPublisher)
            },
            |mut engine| {
                engine.select_for_move(1);
                engine.apply_move(19);
                engine.apply_move(33);
                black_box(engine.apply_move(51))
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_mobility, bench_selection, bench_apply_move);
criterion_main!(benches);
