use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, StandardNormal};
use rtnorm_rs::{TruncatedNormal, rtnorm};

/// One interval per sampler regime.
const CASES: [(&str, f64, f64); 5] = [
    ("bulk", -1.0, 2.0),
    ("bulk_tail_stripe", 1.0, 9.0),
    ("left_tail", -2.5, 3.0),
    ("right_tail", 4.0, 6.0),
    ("narrow", 0.0, 1e-6),
];

fn bench_regimes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtnorm");
    for (name, a, b) in CASES {
        let dist = TruncatedNormal::standard(a, b).unwrap();
        group.bench_with_input(BenchmarkId::new("standard", name), &dist, |bench, dist| {
            let mut rng = StdRng::seed_from_u64(17);
            bench.iter(|| black_box(dist.sample(&mut rng)));
        });
    }
    group.finish();
}

fn bench_per_call(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    c.bench_function("rtnorm_per_call", |bench| {
        bench.iter(|| black_box(rtnorm(&mut rng, black_box(1.0), 9.0, 2.0, 3.0).unwrap()));
    });
}

fn bench_baseline(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    c.bench_function("untruncated_ziggurat", |bench| {
        bench.iter(|| {
            let x: f64 = StandardNormal.sample(&mut rng);
            black_box(x)
        });
    });
}

criterion_group!(benches, bench_regimes, bench_per_call, bench_baseline);
criterion_main!(benches);
