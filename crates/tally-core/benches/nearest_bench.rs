use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tally_core::{find_nearest, PositionMap};

fn build_map(n: usize) -> PositionMap {
    PositionMap::from_pairs((0..n as i64).map(|i| (i, i as f32 * 2.5)))
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_nearest");
    for &n in &[1_000usize, 100_000usize] {
        let map = build_map(n);
        let span = n as f32 * 2.5;
        group.bench_with_input(BenchmarkId::from_parameter(n), &map, |b, map| {
            let mut x = 0.0f32;
            b.iter(|| {
                // sweep across the map like a drag gesture
                x = (x + 7.3) % span;
                black_box(find_nearest(black_box(x), map))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);
