//! Criterion benchmarks for carousel navigation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use vitrine_core::carousel::{Carousel, ReviewSet};
use vitrine_core::deferred::ManualClock;
use vitrine_core::options::CarouselOptions;
use vitrine_core::position::{classify_all, AnimationDirection};
use vitrine_core::surface::NoOpSurface;

fn carousel(n: usize) -> Carousel<usize, NoOpSurface, ManualClock> {
    let reviews = ReviewSet::new((0..n).collect()).unwrap();
    Carousel::with_clock(reviews, CarouselOptions::default(), NoOpSurface, ManualClock::new())
}

fn bench_navigation(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![3, 10, 100, 1_000];

    let mut group = c.benchmark_group("Step");
    for &n in &sizes {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut carousel = carousel(n);
            b.iter(|| carousel.step(AnimationDirection::Next));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("GoToIndex");
    for &n in &sizes {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut carousel = carousel(n);
            let mut target = 0;
            b.iter(|| {
                target = (target + n / 2 + 1) % n;
                carousel.go_to_index(target)
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ClassifyAll");
    for &n in &sizes {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| classify_all(n / 2, n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_navigation);
criterion_main!(benches);
