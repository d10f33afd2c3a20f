//! Criterion benchmarks for value concepts and power indices

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cogame_engine::fixtures::{random_supermodular_game, random_voting_game};
use cogame_indices::{
    power_indices, BanzhafValue, PowerIndex, PowerValue, ShapleyValue, ShiftIndex, TauValue,
};

fn benchmark_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("values");
    for players in [6usize, 10, 14] {
        let game = random_supermodular_game(players, 5).unwrap();
        group.bench_with_input(BenchmarkId::new("shapley", players), &game, |b, game| {
            b.iter(|| ShapleyValue.compute(black_box(game)))
        });
        group.bench_with_input(BenchmarkId::new("banzhaf", players), &game, |b, game| {
            b.iter(|| BanzhafValue::default().compute(black_box(game)))
        });
        group.bench_with_input(BenchmarkId::new("tau", players), &game, |b, game| {
            b.iter(|| TauValue.compute(black_box(game)))
        });
    }
    group.finish();
}

fn benchmark_power_indices(c: &mut Criterion) {
    let game = random_voting_game(9, 12, 17).unwrap();

    c.bench_function("all_power_indices_9", |b| b.iter(|| power_indices(black_box(&game))));
    c.bench_function("shift_index_9", |b| b.iter(|| ShiftIndex.compute(black_box(&game))));
}

criterion_group!(benches, benchmark_values, benchmark_power_indices);
criterion_main!(benches);
