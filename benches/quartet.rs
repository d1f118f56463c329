use anscombe::benchmarks::config;
use anscombe::linear::{least_squares, LinearRegression};
use anscombe::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Anscombe");
    config::set_default_benchmark_configs(&mut group);

    for (idx, dataset) in anscombe_datasets::quartet().iter().enumerate() {
        group.bench_with_input(
            BenchmarkId::new("least_squares", idx + 1),
            dataset,
            |b, dataset| b.iter(|| least_squares(black_box(dataset.records()), dataset.targets())),
        );

        let line = LinearRegression::params().fit(dataset).unwrap();
        group.bench_with_input(BenchmarkId::new("r_squared", idx + 1), dataset, |b, dataset| {
            b.iter(|| {
                r_squared(
                    black_box(dataset.records()),
                    dataset.targets(),
                    line.slope(),
                    line.intercept(),
                )
            })
        });
    }
    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = config::get_default_profiling_configs();
    targets = bench
}
#[cfg(target_os = "windows")]
criterion_group!(benches, bench);

criterion_main!(benches);
