//! Benchmarks for the endgame bitbase: the one-time solve cost and the
//! per-probe cost paid during evaluation.

use chess_tables::bitbase::Bitbase;
use chess_tables::board::Color;
use common::bitboard::Square;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bitbase Solve");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(20));

    group.bench_function("solve_full_space", |b| {
        b.iter(|| black_box(Bitbase::solve()))
    });

    group.finish();
}

fn benchmark_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bitbase Probe");

    let bitbase = Bitbase::solve();
    let positions = [
        (Square::H1, Square::A7, Square::H8, Color::White),
        (Square::A1, Square::A2, Square::A3, Color::Black),
        (Square::E6, Square::E5, Square::E8, Color::White),
        (Square::G6, Square::H5, Square::E8, Color::Black),
    ];

    group.bench_function("probe_known_positions", |b| {
        b.iter(|| {
            for (white_king, white_pawn, black_king, side_to_move) in positions {
                black_box(bitbase.probe(white_king, white_pawn, black_king, side_to_move));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_solve, benchmark_probe);
criterion_main!(benches);
