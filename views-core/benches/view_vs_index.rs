//! Sum of squares through a view against the same loop written with indices

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use views_core::view;

fn indexed_sum_of_squares(values: &[i64]) -> i64 {
    let mut sum = 0;
    for i in 0..values.len() {
        sum += values[i] * values[i];
    }
    sum
}

fn view_sum_of_squares(values: &[i64]) -> i64 {
    view(values).map(|x| x * x).reduce(|acc, x| acc + x, 0)
}

fn bench_sum_of_squares(c: &mut Criterion) {
    let values: Vec<i64> = (0..10_000).collect();

    let mut group = c.benchmark_group("sum_of_squares");
    group.bench_function("indexed", |b| {
        b.iter(|| indexed_sum_of_squares(black_box(&values)))
    });
    group.bench_function("view", |b| b.iter(|| view_sum_of_squares(black_box(&values))));
    group.finish();
}

fn bench_adjacent_differences(c: &mut Criterion) {
    let values: Vec<i64> = (0..10_000).collect();

    c.bench_function("pairwise_differences", |b| {
        b.iter(|| {
            view(black_box(&values))
                .map(|x| x * x)
                .pairwise()
                .map(|(previous, current)| current - previous)
                .reduce(|acc, x| acc + x, 0)
        })
    });
}

criterion_group!(benches, bench_sum_of_squares, bench_adjacent_differences);
criterion_main!(benches);
