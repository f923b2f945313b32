//! Criterion benchmarks measure time of legal move enumeration and perft
//! calculation.

use chessrules::chess::core::{Move, Square};
use chessrules::chess::game::Game;
use chessrules::perft::perft;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shakmaty::{Chess, Position as ShakmatyPosition};

fn opening() -> Game {
    let mut game = Game::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("g1", "f3"), ("b8", "c6")] {
        let from = Square::try_from(from).unwrap();
        let to = Square::try_from(to).unwrap();
        game.make_move(Move::new(from, to, None)).unwrap();
    }
    game
}

fn legal_moves_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Legal moves");
    for (name, game) in [("starting", Game::new()), ("opening", opening())] {
        group.bench_with_input(BenchmarkId::new("per_square", name), &game, |b, game| {
            b.iter(|| {
                Square::iter()
                    .map(|square| game.legal_moves(square))
                    .collect::<Vec<_>>()
            });
        });
        group.bench_with_input(BenchmarkId::new("all_moves", name), &game, |b, game| {
            b.iter(|| std::hint::black_box(game.moves()));
        });
        group.bench_with_input(BenchmarkId::new("outcome", name), &game, |b, game| {
            b.iter(|| std::hint::black_box(game.outcome()));
        });
    }
    // Reference point: shakmaty is a bitboard engine with precomputed attack
    // tables.
    group.bench_function(BenchmarkId::new("reference_shakmaty", "starting"), |b| {
        let position = Chess::default();
        b.iter(|| std::hint::black_box(position.legal_moves()));
    });
    group.finish();
}

criterion_group! {
    name = legal_moves;
    config = Criterion::default().sample_size(100);
    targets = legal_moves_bench
}

// This acts both as performance and correctness test.
fn perft_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    let game = Game::new();
    for (depth, nodes) in [(2, 400), (3, 8_902), (4, 197_281)] {
        group.throughput(criterion::Throughput::Elements(nodes));
        group.bench_with_input(
            BenchmarkId::new("perft", format!("starting, depth {depth}, nodes {nodes}")),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    assert_eq!(perft(&game, depth), nodes);
                });
            },
        );
    }
    group.finish();
}

criterion_group! {
    name = perft_group;
    config = Criterion::default().sample_size(10);
    targets = perft_bench
}

criterion_main!(legal_moves, perft_group);
