/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use npcount_rs::crystal::{ConstantsCache, Facet};
use npcount_rs::estimator::{by_area, by_volume};

fn estimator_benchmark(c: &mut Criterion) {
    let cache = ConstantsCache::new();
    let interface = Some(Facet { h: 1, k: 0, l: 0 });
    let surface = Some(Facet { h: 1, k: 1, l: 1 });

    let mut group = c.benchmark_group("Estimators");

    group.bench_function("by_volume", |b| {
        b.iter(|| {
            for theta in 1..180 {
                black_box(
                    by_volume(
                        &cache,
                        black_box("Ag"),
                        black_box(50.0),
                        theta as f64,
                        interface,
                        surface,
                    )
                    .unwrap(),
                );
            }
        })
    });

    group.bench_function("by_area", |b| {
        b.iter(|| {
            for theta in 1..180 {
                black_box(
                    by_area(
                        &cache,
                        black_box("Ag"),
                        black_box(50.0),
                        theta as f64,
                        interface,
                        surface,
                    )
                    .unwrap(),
                );
            }
        })
    });

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let cache = ConstantsCache::new();
    let facet = Some(Facet { h: 1, k: 1, l: 1 });
    // first call populates the cache; the bench measures hits
    cache.constants("Pt", facet).unwrap();

    c.bench_function("constants_cache_hit", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(cache.constants(black_box("Pt"), facet).unwrap());
            }
        })
    });
}

criterion_group!(benches, estimator_benchmark, lookup_benchmark);
criterion_main!(benches);
